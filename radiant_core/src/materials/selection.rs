//! # Material Selection
//!
//! Turns a room's design load into a purchasable bill of materials: tube
//! size and length, loop split, fin counts, and the method-specific
//! fastening hardware.
//!
//! Quantity math follows the locked product sheet exactly. Tube lengths
//! are rounded up independently in feet and meters (each is a purchasing
//! unit in its own market, and both must cover the floor), so the two
//! figures are not exact conversions of one another.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::calculations::heat_loss::RoomResults;
//! use radiant_core::materials::selection::select_materials;
//! use radiant_core::presets::{InstallMethod, JoistSpacing};
//! use radiant_core::project::RoomInput;
//!
//! let room = RoomInput {
//!     name: "Kitchen".to_string(),
//!     length_m: 4.0,
//!     width_m: 3.0,
//!     height_m: 2.4,
//!     exterior_wall_length_m: 7.0,
//!     window_area_m2: 1.5,
//!     door_area_m2: 0.0,
//!     ceiling_exposed: false,
//!     floor_exposed: false,
//!     floor_on_ground: false,
//!     setpoint_c: None,
//!     install_method: InstallMethod::Drilling,
//!     joist_spacing: Some(JoistSpacing::In16),
//!     floor_cover: None,
//! };
//!
//! let results = RoomResults {
//!     q_fabric_w: 435.2,
//!     q_vent_w: 258.1,
//!     q_psi_w: 1.0,
//!     q_ground_w: 0.0,
//!     q_before_factors_w: 694.4,
//!     q_after_factors_w: 996.0,
//!     load_w_per_m2: 83.0,
//!     water_temp_c: 45.5,
//!     cover_r_value: None,
//!     cover_u_value: None,
//!     warnings: vec![],
//! };
//!
//! let selection = select_materials(&results, &room).unwrap();
//! assert!(selection.tubing_ft > 0);
//! assert!(selection.ft_per_loop <= 300.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::heat_loss::RoomResults;
use crate::errors::{CalcError, CalcResult};
use crate::materials::bands::{self, LoadBand, TubeSize};
use crate::materials::spacing::{
    across_tubing_factor, fin_density_ft2_per_pair, fin_spacing_mm, in_slab_spacing_mm,
    in_slab_tubing_factor, open_web_clip_factor, with_tubing_factor, HANGING_SUPPORTS_PER_FT,
    MAX_LOOP_FT, TOPDOWN_CLIPS_PER_M,
};
use crate::presets::{InstallMethod, JoistSpacing, Orientation};
use crate::project::RoomInput;
use crate::units;

/// Bill of materials for one room.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_band": "HL",
///   "load_btu_hr_ft2": 26.3,
///   "tube_size": "16mm",
///   "supplemental_recommended": false,
///   "area_m2": 12.0,
///   "area_ft2": 129.2,
///   "fin_spacing_mm": null,
///   "tubing_spacing_mm": 330,
///   "tubing_ft": 120,
///   "tubing_m": 37,
///   "loops": 1,
///   "ft_per_loop": 120.0,
///   "m_per_loop": 36.6,
///   "fin_pairs": 93,
///   "fin_halves": 186,
///   "hanging_supports": 0,
///   "open_web_clips": 0,
///   "topdown_clips": 0,
///   "topdown_brackets": 0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSelection {
    // === Classification ===
    pub load_band: LoadBand,
    /// Design load in the product sheet's unit
    pub load_btu_hr_ft2: f64,
    pub tube_size: TubeSize,
    /// Load exceeds what the floor alone should carry
    pub supplemental_recommended: bool,

    // === Floor Area ===
    pub area_m2: f64,
    pub area_ft2: f64,

    // === Spacing (mm) ===
    /// Fin spacing along the bay; with-joist methods only
    pub fin_spacing_mm: Option<u32>,
    /// Tube pitch; across-joist and in-slab methods only
    pub tubing_spacing_mm: Option<u32>,

    // === Tubing (purchasing round-ups) ===
    pub tubing_ft: u32,
    pub tubing_m: u32,
    pub loops: u32,
    pub ft_per_loop: f64,
    pub m_per_loop: f64,

    // === Fins ===
    pub fin_pairs: u32,
    pub fin_halves: u32,

    // === Method Hardware ===
    pub hanging_supports: u32,
    pub open_web_clips: u32,
    pub topdown_clips: u32,
    /// Bracket SKU follows `tube_size`
    pub topdown_brackets: u32,
}

/// Select materials for a room from its heat-loss results.
///
/// # Arguments
///
/// * `results` - Output of [`crate::calculations::heat_loss::calculate_room`]
/// * `room` - The room the results were computed for (geometry, method,
///   joist spacing)
///
/// # Returns
///
/// * `Ok(MaterialSelection)` - Quantities and classification
/// * `Err(CalcError)` - `MissingField` when a joisted method has no joist
///   spacing, `CalculationFailed` if the loop split violates the length cap
pub fn select_materials(results: &RoomResults, room: &RoomInput) -> CalcResult<MaterialSelection> {
    room.validate()?;

    let method = room.install_method;
    let joist = match (method.requires_joist_spacing(), room.joist_spacing) {
        (true, Some(joist)) => Some(joist),
        (true, None) => return Err(CalcError::missing_field("joist_spacing")),
        (false, _) => None,
    };

    let area_m2 = room.floor_area_m2();
    let area_ft2 = units::square_meters_to_square_feet(area_m2);

    let load_btu_hr_ft2 = units::w_per_m2_to_btu_hr_ft2(results.load_w_per_m2);
    let load_band = LoadBand::classify_btu(load_btu_hr_ft2);
    let tube_size = TubeSize::for_load(load_btu_hr_ft2, method);
    let supplemental = bands::supplemental_recommended(load_btu_hr_ft2);

    // === Tubing ===
    let factor = match method.orientation() {
        // joist is always present for joisted methods, checked above
        Orientation::AcrossJoists => across_tubing_factor(require_joist(joist)?, load_band),
        Orientation::WithJoists => with_tubing_factor(require_joist(joist)?),
        Orientation::Slab => in_slab_tubing_factor(load_band),
    };
    let tubing_ft = (area_ft2 * factor).ceil() as u32;
    let tubing_m = (area_m2 * factor * units::M_TO_FT).ceil() as u32;

    // === Loops ===
    let loops = ((tubing_ft as f64 / MAX_LOOP_FT).ceil() as u32).max(1);
    let ft_per_loop = tubing_ft as f64 / loops as f64;
    let m_per_loop = ft_per_loop * units::FT_TO_M;
    if ft_per_loop > MAX_LOOP_FT + 1e-9 {
        return Err(CalcError::calculation_failed(
            "loop_split",
            format!("{ft_per_loop:.1} ft per loop exceeds the {MAX_LOOP_FT} ft limit"),
        ));
    }

    // === Fins ===
    // The sheet prices fins for every method; slab jobs simply do not
    // order them.
    let fin_pairs = (area_ft2 / fin_density_ft2_per_pair(load_band)).ceil() as u32;
    let fin_halves = fin_pairs * 2;

    // === Method Hardware ===
    let mut hanging_supports = 0;
    let mut open_web_clips = 0;
    let mut topdown_clips = 0;
    let mut topdown_brackets = 0;
    match method {
        InstallMethod::HangingSnake | InstallMethod::HangingClip => {
            hanging_supports = (tubing_ft as f64 * HANGING_SUPPORTS_PER_FT).ceil() as u32;
        }
        InstallMethod::OpenWeb => {
            open_web_clips =
                (area_ft2 * open_web_clip_factor(require_joist(joist)?, load_band)).ceil() as u32;
        }
        InstallMethod::TopDown => {
            let per_length = (tubing_m as f64 * TOPDOWN_CLIPS_PER_M).ceil() as u32;
            topdown_clips = (fin_halves * 2).max(per_length);
            topdown_brackets = topdown_clips.div_ceil(2);
        }
        InstallMethod::Drilling | InstallMethod::InSlab => {}
    }

    // === Spacing Report ===
    let (fin_spacing, tubing_spacing) = match method.orientation() {
        Orientation::WithJoists => (Some(fin_spacing_mm(require_joist(joist)?, load_band)), None),
        Orientation::AcrossJoists => (None, Some(fin_spacing_mm(require_joist(joist)?, load_band))),
        Orientation::Slab => (None, Some(in_slab_spacing_mm(load_band))),
    };

    Ok(MaterialSelection {
        load_band,
        load_btu_hr_ft2,
        tube_size,
        supplemental_recommended: supplemental,
        area_m2,
        area_ft2,
        fin_spacing_mm: fin_spacing,
        tubing_spacing_mm: tubing_spacing,
        tubing_ft,
        tubing_m,
        loops,
        ft_per_loop,
        m_per_loop,
        fin_pairs,
        fin_halves,
        hanging_supports,
        open_web_clips,
        topdown_clips,
        topdown_brackets,
    })
}

fn require_joist(joist: Option<JoistSpacing>) -> CalcResult<JoistSpacing> {
    joist.ok_or_else(|| CalcError::missing_field("joist_spacing"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn results_with_load(load_w_per_m2: f64) -> RoomResults {
        RoomResults {
            q_fabric_w: 0.0,
            q_vent_w: 0.0,
            q_psi_w: 0.0,
            q_ground_w: 0.0,
            q_before_factors_w: 0.0,
            q_after_factors_w: 0.0,
            load_w_per_m2,
            water_temp_c: 40.0,
            cover_r_value: None,
            cover_u_value: None,
            warnings: vec![],
        }
    }

    fn room(
        area: (f64, f64),
        method: InstallMethod,
        joist: Option<JoistSpacing>,
    ) -> RoomInput {
        RoomInput {
            name: "Test".to_string(),
            length_m: area.0,
            width_m: area.1,
            height_m: 2.4,
            exterior_wall_length_m: 4.0,
            window_area_m2: 0.0,
            door_area_m2: 0.0,
            ceiling_exposed: false,
            floor_exposed: false,
            floor_on_ground: false,
            setpoint_c: None,
            install_method: method,
            joist_spacing: joist,
            floor_cover: None,
        }
    }

    #[test]
    fn test_drilling_16in_low_load() {
        // 12 m2 = 129.1668 ft2, 60 W/m2 = 19.0 BTU -> LL
        let selection = select_materials(
            &results_with_load(60.0),
            &room((4.0, 3.0), InstallMethod::Drilling, Some(JoistSpacing::In16)),
        )
        .unwrap();

        assert_eq!(selection.load_band, LoadBand::LowLoad);
        assert_eq!(selection.tube_size, TubeSize::Mm16);
        assert!(!selection.supplemental_recommended);

        // ceil(129.1668 * 0.75) = 97 ft, ceil(12 * 0.75 * 3.28084) = 30 m
        assert_eq!(selection.tubing_ft, 97);
        assert_eq!(selection.tubing_m, 30);

        // ceil(129.1668 / 1.8) = 72 pairs
        assert_eq!(selection.fin_pairs, 72);
        assert_eq!(selection.fin_halves, 144);

        assert_eq!(selection.loops, 1);
        assert!((selection.ft_per_loop - 97.0).abs() < 1e-9);

        // Across-joist method reports tube pitch, not fin spacing
        assert_eq!(selection.fin_spacing_mm, None);
        assert_eq!(selection.tubing_spacing_mm, Some(400));

        // Drilled holes carry the tube; no hardware
        assert_eq!(selection.hanging_supports, 0);
        assert_eq!(selection.open_web_clips, 0);
        assert_eq!(selection.topdown_clips, 0);
    }

    #[test]
    fn test_high_load_uses_high_columns() {
        // 100 W/m2 = 31.7 BTU -> HL
        let selection = select_materials(
            &results_with_load(100.0),
            &room((4.0, 3.0), InstallMethod::Drilling, Some(JoistSpacing::In19)),
        )
        .unwrap();

        assert_eq!(selection.load_band, LoadBand::HighLoad);
        // ceil(129.1668 * 1.0909) = ceil(140.91) = 141
        assert_eq!(selection.tubing_ft, 141);
        assert_eq!(selection.tubing_spacing_mm, Some(280));
        // HL fin density 1.4: ceil(129.1668 / 1.4) = 93
        assert_eq!(selection.fin_pairs, 93);
    }

    #[test]
    fn test_tube_upgrade_and_supplemental_are_independent() {
        // 150 W/m2 = 47.55 BTU: above the 46 tube-upgrade edge,
        // below the 50 supplemental edge
        let selection = select_materials(
            &results_with_load(150.0),
            &room((4.0, 3.0), InstallMethod::Drilling, Some(JoistSpacing::In16)),
        )
        .unwrap();
        assert_eq!(selection.load_band, LoadBand::HighOutput);
        assert_eq!(selection.tube_size, TubeSize::Mm20);
        assert!(!selection.supplemental_recommended);

        // 160 W/m2 = 50.7 BTU: above both
        let selection = select_materials(
            &results_with_load(160.0),
            &room((4.0, 3.0), InstallMethod::Drilling, Some(JoistSpacing::In16)),
        )
        .unwrap();
        assert!(selection.supplemental_recommended);
    }

    #[test]
    fn test_hanging_supports() {
        let selection = select_materials(
            &results_with_load(60.0),
            &room((4.0, 3.0), InstallMethod::HangingSnake, Some(JoistSpacing::In16)),
        )
        .unwrap();

        // With-joist 16": ceil(129.1668 * 0.75) = 97 ft
        assert_eq!(selection.tubing_ft, 97);
        // One support per 2.5 ft: ceil(97 * 0.4) = 39
        assert_eq!(selection.hanging_supports, 39);
        // With-joist method reports fin spacing, not tube pitch
        assert_eq!(selection.fin_spacing_mm, Some(400));
        assert_eq!(selection.tubing_spacing_mm, None);
    }

    #[test]
    fn test_open_web_clips() {
        let selection = select_materials(
            &results_with_load(100.0),
            &room((4.0, 3.0), InstallMethod::OpenWeb, Some(JoistSpacing::In19)),
        )
        .unwrap();
        // ceil(129.1668 * 0.344) = ceil(44.43) = 45
        assert_eq!(selection.open_web_clips, 45);
        assert_eq!(selection.hanging_supports, 0);
    }

    #[test]
    fn test_topdown_hardware() {
        let selection = select_materials(
            &results_with_load(60.0),
            &room((4.0, 3.0), InstallMethod::TopDown, Some(JoistSpacing::In16)),
        )
        .unwrap();

        // tubing_m = 30, fin_halves = 144
        // clips = max(144 * 2, ceil(30 * 1.5)) = max(288, 45) = 288
        assert_eq!(selection.topdown_clips, 288);
        assert_eq!(selection.topdown_brackets, 144);
        assert_eq!(selection.tube_size, TubeSize::Mm16);
    }

    #[test]
    fn test_in_slab() {
        let selection = select_materials(
            &results_with_load(60.0),
            &room((4.0, 3.0), InstallMethod::InSlab, None),
        )
        .unwrap();

        // Flat factor 1.5 at low load: ceil(129.1668 * 1.5) = 194 ft
        assert_eq!(selection.tubing_ft, 194);
        assert_eq!(selection.tubing_m, 60);
        assert_eq!(selection.tubing_spacing_mm, Some(200));
        assert_eq!(selection.fin_spacing_mm, None);
        assert_eq!(selection.hanging_supports, 0);
        assert_eq!(selection.open_web_clips, 0);

        // High-output slab tightens pitch but keeps the 16 mm coil
        let high = select_materials(
            &results_with_load(200.0),
            &room((4.0, 3.0), InstallMethod::InSlab, None),
        )
        .unwrap();
        assert_eq!(high.tubing_spacing_mm, Some(150));
        assert_eq!(high.tube_size, TubeSize::Mm16);
    }

    #[test]
    fn test_missing_joist_spacing_is_an_error() {
        let err = select_materials(
            &results_with_load(60.0),
            &room((4.0, 3.0), InstallMethod::Drilling, None),
        )
        .unwrap_err();
        assert_eq!(err, CalcError::missing_field("joist_spacing"));

        // In-slab does not need one
        assert!(select_materials(
            &results_with_load(60.0),
            &room((4.0, 3.0), InstallMethod::InSlab, None),
        )
        .is_ok());
    }

    #[test]
    fn test_loop_split() {
        // 100 m2 at 19" HL: ceil(1076.39 * 1.0909) = 1175 ft -> 4 loops
        let selection = select_materials(
            &results_with_load(100.0),
            &room((10.0, 10.0), InstallMethod::Drilling, Some(JoistSpacing::In19)),
        )
        .unwrap();
        assert_eq!(selection.tubing_ft, 1175);
        assert_eq!(selection.loops, 4);
        assert!((selection.ft_per_loop - 293.75).abs() < 1e-9);
        assert!((selection.m_per_loop - 293.75 * 0.3048).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_loops_balanced_and_capped(
            length in 0.5..40.0f64,
            width in 0.5..40.0f64,
            load in 1.0..400.0f64,
        ) {
            let selection = select_materials(
                &results_with_load(load),
                &room((length, width), InstallMethod::Drilling, Some(JoistSpacing::In19)),
            ).unwrap();

            // Every loop fits the head-loss cap
            prop_assert!(selection.ft_per_loop <= MAX_LOOP_FT + 1e-9);
            prop_assert!(selection.loops >= 1);

            // Loop count is minimal: one fewer loop would blow the cap
            if selection.loops > 1 {
                let fewer = selection.tubing_ft as f64 / (selection.loops - 1) as f64;
                prop_assert!(fewer > MAX_LOOP_FT);
            }

            // The split loses no tube
            let total = selection.ft_per_loop * selection.loops as f64;
            prop_assert!((total - selection.tubing_ft as f64).abs() < 1e-6);
        }
    }
}
