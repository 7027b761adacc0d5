//! Supply Water Temperature
//!
//! Maps a room's design load density to the required supply water
//! temperature using the manufacturer's commissioning curve, plus the
//! floor-covering correction. In-slab systems skip the curve entirely and
//! run at one of two fixed band temperatures.

use crate::materials::bands::LoadBand;
use crate::units;

/// Commissioning curve: (load W/m2, supply °C), ascending in load.
/// Interpolation is linear between points and clamped at both ends.
const WATER_CURVE: [(f64, f64); 8] = [
    (20.0, 30.0),
    (40.0, 35.0),
    (60.0, 40.0),
    (76.0, 44.0),
    (100.0, 49.0),
    (120.0, 53.0),
    (145.0, 57.0),
    (160.0, 60.0),
];

/// Floor-covering supply correction per unit R (°C per m2K/W)
pub const COVER_BONUS_PER_R: f64 = 25.0;

/// Ceiling on the floor-covering correction (°C)
pub const MAX_COVER_BONUS_C: f64 = 12.0;

/// In-slab supply setpoints (°F on the product sheet)
pub const IN_SLAB_LOW_SUPPLY_F: f64 = 100.0;
pub const IN_SLAB_HIGH_SUPPLY_F: f64 = 120.0;

/// Interpolate the supply temperature (°C) for a load density (W/m2).
///
/// Loads below the first curve point return the first temperature; loads
/// above the last return the last. The curve itself never exceeds 60 °C,
/// the screed limit.
pub fn interpolate_supply_temp_c(load_w_per_m2: f64) -> f64 {
    let (first_load, first_temp) = WATER_CURVE[0];
    if load_w_per_m2 <= first_load {
        return first_temp;
    }
    for pair in WATER_CURVE.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if load_w_per_m2 <= x1 {
            let t = (load_w_per_m2 - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }
    let (_, last_temp) = WATER_CURVE[WATER_CURVE.len() - 1];
    last_temp
}

/// Supply correction (°C) for a floor covering's thermal resistance
pub fn cover_bonus_c(r_value: f64) -> f64 {
    (COVER_BONUS_PER_R * r_value).min(MAX_COVER_BONUS_C)
}

/// Fixed in-slab supply temperature (°C) for a load band.
///
/// Slab mass evens out delivery, so in-slab systems run one of two
/// setpoints instead of following the curve.
pub fn in_slab_supply_temp_c(band: LoadBand) -> f64 {
    let setpoint_f = match band {
        LoadBand::LowLoad => IN_SLAB_LOW_SUPPLY_F,
        LoadBand::HighLoad | LoadBand::HighOutput => IN_SLAB_HIGH_SUPPLY_F,
    };
    units::fahrenheit_to_celsius(setpoint_f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamping_at_curve_ends() {
        assert_eq!(interpolate_supply_temp_c(0.0), 30.0);
        assert_eq!(interpolate_supply_temp_c(20.0), 30.0);
        assert_eq!(interpolate_supply_temp_c(160.0), 60.0);
        assert_eq!(interpolate_supply_temp_c(500.0), 60.0);
    }

    #[test]
    fn test_curve_anchors() {
        assert!((interpolate_supply_temp_c(76.0) - 44.0).abs() < 1e-12);
        assert!((interpolate_supply_temp_c(145.0) - 57.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_between_anchors() {
        // Halfway between (40, 35) and (60, 40)
        assert!((interpolate_supply_temp_c(50.0) - 37.5).abs() < 1e-12);
    }

    #[test]
    fn test_cover_bonus() {
        assert!((cover_bonus_c(0.1) - 2.5).abs() < 1e-12);
        // Thick carpet hits the cap
        assert_eq!(cover_bonus_c(0.5), 12.0);
        assert_eq!(cover_bonus_c(0.0), 0.0);
    }

    #[test]
    fn test_in_slab_setpoints() {
        assert!((in_slab_supply_temp_c(LoadBand::LowLoad) - 37.777).abs() < 1e-3);
        assert!((in_slab_supply_temp_c(LoadBand::HighLoad) - 48.888).abs() < 1e-3);
        assert_eq!(
            in_slab_supply_temp_c(LoadBand::HighOutput),
            in_slab_supply_temp_c(LoadBand::HighLoad)
        );
    }

    proptest! {
        #[test]
        fn prop_curve_monotonic(a in 0.0..300.0f64, b in 0.0..300.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(interpolate_supply_temp_c(lo) <= interpolate_supply_temp_c(hi));
        }

        #[test]
        fn prop_curve_bounded(load in 0.0..1000.0f64) {
            let temp = interpolate_supply_temp_c(load);
            prop_assert!((30.0..=60.0).contains(&temp));
        }
    }
}
