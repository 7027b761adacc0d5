//! # Display Projections
//!
//! Stored values are always SI; regional units exist only at the edges.
//! This module is the edge: `*_to_display` projects a stored value into
//! the region's display unit, `*_from_display` converts user input back
//! to SI. Metric regions pass through unchanged.
//!
//! Quantities that are outputs only (power, load density) have no
//! `from_display` counterpart.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::display::{format_spacing, temp_to_display};
//! use radiant_core::presets::UnitSystem;
//!
//! assert_eq!(temp_to_display(10.0, UnitSystem::Imperial), 50.0);
//! assert_eq!(format_spacing(150, UnitSystem::Imperial), "6\" (150 mm)");
//! assert_eq!(format_spacing(150, UnitSystem::Metric), "150 mm");
//! ```

use crate::presets::UnitSystem;
use crate::summary::SpacingSummary;
use crate::units;

// === Temperature (°C / °F) ===

pub fn temp_to_display(celsius: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => celsius,
        UnitSystem::Imperial => units::celsius_to_fahrenheit(celsius),
    }
}

pub fn temp_from_display(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => units::fahrenheit_to_celsius(value),
    }
}

// === Length (m / ft) ===

pub fn length_to_display(meters: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => meters,
        UnitSystem::Imperial => units::meters_to_feet(meters),
    }
}

pub fn length_from_display(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => units::feet_to_meters(value),
    }
}

// === Area (m² / ft²) ===

pub fn area_to_display(square_meters: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => square_meters,
        UnitSystem::Imperial => units::square_meters_to_square_feet(square_meters),
    }
}

pub fn area_from_display(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => units::square_feet_to_square_meters(value),
    }
}

// === U-value (W/m²K / BTU/hr·ft²·°F) ===

pub fn u_value_to_display(si: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => si,
        UnitSystem::Imperial => units::u_si_to_imperial(si),
    }
}

pub fn u_value_from_display(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => units::u_imperial_to_si(value),
    }
}

// === Mechanical ventilation (m³/h / CFM) ===

pub fn ventilation_to_display(m3_per_h: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => m3_per_h,
        UnitSystem::Imperial => units::m3_per_h_to_cfm(m3_per_h),
    }
}

pub fn ventilation_from_display(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => units::cfm_to_m3_per_h(value),
    }
}

// === Thermal bridging allowance (W/K / BTU/hr·°F) ===

pub fn psi_to_display(w_per_k: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => w_per_k,
        UnitSystem::Imperial => units::psi_si_to_imperial(w_per_k),
    }
}

pub fn psi_from_display(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => units::psi_imperial_to_si(value),
    }
}

// === Output-only projections ===

pub fn power_to_display(watts: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => watts,
        UnitSystem::Imperial => units::watts_to_btu_hr(watts),
    }
}

pub fn load_to_display(w_per_m2: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => w_per_m2,
        UnitSystem::Imperial => units::w_per_m2_to_btu_hr_ft2(w_per_m2),
    }
}

// === Unit labels ===

pub fn temp_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "°C",
        UnitSystem::Imperial => "°F",
    }
}

pub fn length_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "m",
        UnitSystem::Imperial => "ft",
    }
}

pub fn area_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "m²",
        UnitSystem::Imperial => "ft²",
    }
}

pub fn u_value_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "W/m²K",
        UnitSystem::Imperial => "BTU/hr·ft²·°F",
    }
}

pub fn ventilation_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "m³/h",
        UnitSystem::Imperial => "CFM",
    }
}

pub fn psi_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "W/K",
        UnitSystem::Imperial => "BTU/hr·°F",
    }
}

pub fn power_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "W",
        UnitSystem::Imperial => "BTU/hr",
    }
}

pub fn load_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "W/m²",
        UnitSystem::Imperial => "BTU/hr·ft²",
    }
}

// === Value formatting ===

/// Catalog spacings are defined in mm; imperial regions see the nearest
/// whole inch with the exact mm alongside.
pub fn format_spacing(mm: u32, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{} mm", mm),
        UnitSystem::Imperial => {
            format!("{:.0}\" ({} mm)", units::millimeters_to_inches(mm as f64), mm)
        }
    }
}

pub fn format_spacing_summary(spacing: Option<SpacingSummary>, system: UnitSystem) -> String {
    match spacing {
        None => "-".to_string(),
        Some(SpacingSummary::Uniform(mm)) => format_spacing(mm, system),
        Some(SpacingSummary::Varies) => "varies".to_string(),
    }
}

pub fn format_temperature(celsius: f64, system: UnitSystem) -> String {
    format!("{:.1} {}", temp_to_display(celsius, system), temp_unit(system))
}

pub fn format_length(meters: f64, system: UnitSystem) -> String {
    format!("{:.1} {}", length_to_display(meters, system), length_unit(system))
}

pub fn format_area(square_meters: f64, system: UnitSystem) -> String {
    format!("{:.1} {}", area_to_display(square_meters, system), area_unit(system))
}

pub fn format_power(watts: f64, system: UnitSystem) -> String {
    format!("{:.0} {}", power_to_display(watts, system), power_unit(system))
}

pub fn format_load(w_per_m2: f64, system: UnitSystem) -> String {
    format!("{:.1} {}", load_to_display(w_per_m2, system), load_unit(system))
}
