//! Locked Product Tables
//!
//! Tubing run factors, fin spacing, clip densities and loop limits from the
//! manufacturer's product sheet. These values are cut into the physical
//! SKUs; changing them here without a matching catalog change will produce
//! orders that do not fit the floor.
//!
//! All "high" columns apply to both the high-load and high-output bands.
//! The 24" tables equal the 12" tables: a 24" bay runs two serpentine
//! passes, so per-square-foot quantities match two 12" bays.

use crate::materials::bands::LoadBand;
use crate::presets::JoistSpacing;

/// Longest allowed tube run per loop (ft), set by head-loss limits
pub const MAX_LOOP_FT: f64 = 300.0;

/// Hanging-method tube supports per foot of tube (one support every 2.5 ft)
pub const HANGING_SUPPORTS_PER_FT: f64 = 0.4;

/// Top-down clips per meter of tube
pub const TOPDOWN_CLIPS_PER_M: f64 = 1.5;

/// Tube feet per square foot of floor for across-joist methods
/// (drilled and open-web)
pub fn across_tubing_factor(joist: JoistSpacing, band: LoadBand) -> f64 {
    let high = band.uses_high_tables();
    match (joist, high) {
        (JoistSpacing::In12, false) => 0.5714,
        (JoistSpacing::In12, true) => 0.7059,
        (JoistSpacing::In16, false) => 0.75,
        (JoistSpacing::In16, true) => 0.9231,
        (JoistSpacing::In19, false) => 0.8571,
        (JoistSpacing::In19, true) => 1.0909,
        (JoistSpacing::In24, false) => 0.5714,
        (JoistSpacing::In24, true) => 0.7059,
    }
}

/// Tube feet per square foot of floor for with-joist methods
/// (hanging and top-down). Load band does not change the bay count.
pub fn with_tubing_factor(joist: JoistSpacing) -> f64 {
    match joist {
        JoistSpacing::In12 => 1.0,
        JoistSpacing::In16 => 0.75,
        JoistSpacing::In19 => 0.6316,
        JoistSpacing::In24 => 1.0,
    }
}

/// Tube feet per square foot of floor for in-slab coils
/// (8" centers low load, 6" centers high)
pub fn in_slab_tubing_factor(band: LoadBand) -> f64 {
    if band.uses_high_tables() {
        2.0
    } else {
        1.5
    }
}

/// Fin spacing along the bay (mm). The same catalog dimension is the tube
/// pitch for across-joist methods.
pub fn fin_spacing_mm(joist: JoistSpacing, band: LoadBand) -> u32 {
    let high = band.uses_high_tables();
    match (joist, high) {
        (JoistSpacing::In12, false) => 530,
        (JoistSpacing::In12, true) => 430,
        (JoistSpacing::In16, false) => 400,
        (JoistSpacing::In16, true) => 330,
        (JoistSpacing::In19, false) => 360,
        (JoistSpacing::In19, true) => 280,
        (JoistSpacing::In24, false) => 530,
        (JoistSpacing::In24, true) => 430,
    }
}

/// In-slab tube pitch (mm), joist-independent
pub fn in_slab_spacing_mm(band: LoadBand) -> u32 {
    if band.uses_high_tables() {
        150
    } else {
        200
    }
}

/// Open-web clips per square foot of floor
pub fn open_web_clip_factor(joist: JoistSpacing, band: LoadBand) -> f64 {
    let high = band.uses_high_tables();
    match (joist, high) {
        (JoistSpacing::In12, false) => 0.286,
        (JoistSpacing::In12, true) => 0.353,
        (JoistSpacing::In16, false) => 0.281,
        (JoistSpacing::In16, true) => 0.346,
        (JoistSpacing::In19, false) => 0.271,
        (JoistSpacing::In19, true) => 0.344,
        (JoistSpacing::In24, false) => 0.286,
        (JoistSpacing::In24, true) => 0.353,
    }
}

/// Square feet of floor served by one fin pair
pub fn fin_density_ft2_per_pair(band: LoadBand) -> f64 {
    if band.uses_high_tables() {
        1.4
    } else {
        1.8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_across_factors() {
        assert_eq!(across_tubing_factor(JoistSpacing::In16, LoadBand::LowLoad), 0.75);
        assert_eq!(across_tubing_factor(JoistSpacing::In16, LoadBand::HighLoad), 0.9231);
        assert_eq!(across_tubing_factor(JoistSpacing::In19, LoadBand::HighLoad), 1.0909);
        // 24" bays run double passes, matching the 12" figures
        assert_eq!(
            across_tubing_factor(JoistSpacing::In24, LoadBand::LowLoad),
            across_tubing_factor(JoistSpacing::In12, LoadBand::LowLoad)
        );
    }

    #[test]
    fn test_high_output_uses_high_columns() {
        for joist in JoistSpacing::ALL {
            assert_eq!(
                across_tubing_factor(joist, LoadBand::HighOutput),
                across_tubing_factor(joist, LoadBand::HighLoad)
            );
            assert_eq!(
                fin_spacing_mm(joist, LoadBand::HighOutput),
                fin_spacing_mm(joist, LoadBand::HighLoad)
            );
            assert_eq!(
                open_web_clip_factor(joist, LoadBand::HighOutput),
                open_web_clip_factor(joist, LoadBand::HighLoad)
            );
        }
    }

    #[test]
    fn test_with_joist_factors() {
        assert_eq!(with_tubing_factor(JoistSpacing::In12), 1.0);
        assert_eq!(with_tubing_factor(JoistSpacing::In16), 0.75);
        assert_eq!(with_tubing_factor(JoistSpacing::In19), 0.6316);
        assert_eq!(with_tubing_factor(JoistSpacing::In24), 1.0);
    }

    #[test]
    fn test_fin_spacing() {
        assert_eq!(fin_spacing_mm(JoistSpacing::In16, LoadBand::LowLoad), 400);
        assert_eq!(fin_spacing_mm(JoistSpacing::In16, LoadBand::HighLoad), 330);
        assert_eq!(fin_spacing_mm(JoistSpacing::In19, LoadBand::HighLoad), 280);
        // Tighter spacing under higher load, for every joist size
        for joist in JoistSpacing::ALL {
            assert!(
                fin_spacing_mm(joist, LoadBand::HighLoad) < fin_spacing_mm(joist, LoadBand::LowLoad)
            );
        }
    }

    #[test]
    fn test_in_slab_tables() {
        assert_eq!(in_slab_tubing_factor(LoadBand::LowLoad), 1.5);
        assert_eq!(in_slab_tubing_factor(LoadBand::HighLoad), 2.0);
        assert_eq!(in_slab_spacing_mm(LoadBand::LowLoad), 200);
        assert_eq!(in_slab_spacing_mm(LoadBand::HighOutput), 150);
    }

    #[test]
    fn test_fin_density() {
        assert_eq!(fin_density_ft2_per_pair(LoadBand::LowLoad), 1.8);
        assert_eq!(fin_density_ft2_per_pair(LoadBand::HighLoad), 1.4);
        assert_eq!(fin_density_ft2_per_pair(LoadBand::HighOutput), 1.4);
    }
}
