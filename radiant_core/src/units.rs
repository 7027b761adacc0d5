//! # Unit Conversions
//!
//! Conversion constants and helpers between SI and imperial quantities.
//!
//! ## Design Philosophy
//!
//! The engine stores and computes everything in SI (meters, square meters,
//! degrees Celsius, watts, W/m2K). Imperial values exist only at the edges:
//! settings entered in an imperial region are converted once on the way in,
//! and results are projected to imperial on the way out. Conversion factors
//! are fixed and linear (temperatures affine); there is no locale logic here.
//!
//! Calculation structs carry plain `f64` fields with unit-suffixed names
//! (`length_m`, `load_w_per_m2`) rather than wrapper types, keeping JSON
//! clean and the math readable.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::units::{fahrenheit_to_celsius, feet_to_meters};
//!
//! let design_temp_c = fahrenheit_to_celsius(14.0);
//! assert!((design_temp_c - (-10.0)).abs() < 1e-9);
//!
//! let span_m = feet_to_meters(10.0);
//! assert!((span_m - 3.048).abs() < 1e-9);
//! ```

// ============================================================================
// Length and Area
// ============================================================================

/// Feet to meters
pub const FT_TO_M: f64 = 0.3048;

/// Meters to feet
pub const M_TO_FT: f64 = 3.28084;

/// Square feet to square meters
pub const FT2_TO_M2: f64 = 0.092903;

/// Square feet per square meter
pub const FT2_PER_M2: f64 = 10.7639;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

pub fn feet_to_meters(ft: f64) -> f64 {
    ft * FT_TO_M
}

pub fn meters_to_feet(m: f64) -> f64 {
    m * M_TO_FT
}

pub fn square_feet_to_square_meters(ft2: f64) -> f64 {
    ft2 * FT2_TO_M2
}

pub fn square_meters_to_square_feet(m2: f64) -> f64 {
    m2 * FT2_PER_M2
}

pub fn millimeters_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

// ============================================================================
// Temperature
// ============================================================================

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

// ============================================================================
// Heat Transfer
// ============================================================================

/// Imperial U-value (BTU/hr·ft2·°F) to SI (W/m2K)
pub const U_IMPERIAL_TO_SI: f64 = 1.0 / 0.1761;

/// Watts to BTU/hr
pub const W_TO_BTU_HR: f64 = 3.412;

/// Load density divisor: W/m2 per BTU/hr·ft2
pub const W_PER_M2_PER_BTU_HR_FT2: f64 = 3.15459;

pub fn u_imperial_to_si(u: f64) -> f64 {
    u * U_IMPERIAL_TO_SI
}

pub fn u_si_to_imperial(u: f64) -> f64 {
    u / U_IMPERIAL_TO_SI
}

pub fn watts_to_btu_hr(w: f64) -> f64 {
    w * W_TO_BTU_HR
}

pub fn w_per_m2_to_btu_hr_ft2(w_per_m2: f64) -> f64 {
    w_per_m2 / W_PER_M2_PER_BTU_HR_FT2
}

// ============================================================================
// Ventilation and Bridging Allowances
// ============================================================================

/// Cubic feet per minute to cubic meters per hour
pub const CFM_TO_M3_PER_H: f64 = 1.699;

/// Thermal bridging allowance: BTU/hr·°F to W/K
pub const PSI_IMPERIAL_TO_SI: f64 = 1.0 / 1.895;

pub fn cfm_to_m3_per_h(cfm: f64) -> f64 {
    cfm * CFM_TO_M3_PER_H
}

pub fn m3_per_h_to_cfm(m3h: f64) -> f64 {
    m3h / CFM_TO_M3_PER_H
}

pub fn psi_imperial_to_si(psi: f64) -> f64 {
    psi * PSI_IMPERIAL_TO_SI
}

pub fn psi_si_to_imperial(psi: f64) -> f64 {
    psi / PSI_IMPERIAL_TO_SI
}
