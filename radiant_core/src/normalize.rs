//! # Settings Normalizer
//!
//! Converts `ProjectSettings` (entered in the region's own units) into the
//! SI working set every calculator runs on, resolving the fabric presets
//! along the way.
//!
//! Preset resolution is a fixed override chain, weakest first:
//!
//! 1. construction-period preset (generic table)
//! 2. UK building-stock preset (only for UK projects in BS EN 12831 mode)
//! 3. glazing-derived window U-value
//! 4. explicit user overrides
//!
//! All range validation happens here, after unit conversion, so downstream
//! calculators never see NaN, infinities or out-of-range design values.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::normalize::normalize;
//! use radiant_core::presets::{InsulationPeriod, Region};
//! use radiant_core::project::ProjectSettings;
//!
//! let mut settings = ProjectSettings::new_for_region(Region::Uk);
//! settings.insulation_period = Some(InsulationPeriod::Pre1980);
//! settings.outdoor_design_temp = Some(-5.0);
//!
//! let si = normalize(&settings).unwrap();
//! assert_eq!(si.u.wall, 0.8);
//! assert_eq!(si.outdoor_temp_c, -5.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::presets::{InsulationPeriod, Region, StandardsMode, UnitSystem};
use crate::project::ProjectSettings;
use crate::units;

/// Resolved fabric U-values (W/m2K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UValuesSi {
    pub wall: f64,
    pub window: f64,
    pub door: f64,
    pub roof: f64,
    pub floor: f64,
}

/// Project settings in SI with every preset resolved.
///
/// This is the only settings form the calculators accept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsSi {
    pub region: Region,
    pub standards_mode: StandardsMode,
    pub insulation_period: InsulationPeriod,

    // === Design temperatures (°C) ===
    pub indoor_temp_c: f64,
    pub outdoor_temp_c: f64,

    // === Standards factors ===
    pub safety_factor_pct: f64,
    pub heat_up_factor_pct: f64,
    /// Thermal bridging allowance (W/K)
    pub psi_allowance_w_per_k: f64,
    /// Mechanical ventilation rate (m3/h)
    pub mech_vent_m3_per_h: f64,
    /// Infiltration rate (air changes per hour)
    pub ach: f64,

    /// Resolved fabric U-values
    pub u: UValuesSi,
}

/// Convert project settings to SI and resolve the preset chain.
///
/// Fails with `MissingField` when the insulation period or the outdoor
/// design temperature is unset, and with `InvalidInput` for non-finite or
/// out-of-range values.
pub fn normalize(settings: &ProjectSettings) -> CalcResult<SettingsSi> {
    let period = settings
        .insulation_period
        .ok_or_else(|| CalcError::missing_field("insulation_period"))?;
    let outdoor_entry = settings
        .outdoor_design_temp
        .ok_or_else(|| CalcError::missing_field("outdoor_design_temp"))?;

    let imperial = settings.region.unit_system() == UnitSystem::Imperial;

    let indoor_temp_c = if imperial {
        units::fahrenheit_to_celsius(settings.indoor_temp)
    } else {
        settings.indoor_temp
    };
    let outdoor_temp_c = if imperial {
        units::fahrenheit_to_celsius(outdoor_entry)
    } else {
        outdoor_entry
    };

    check_range("indoor_temp", indoor_temp_c, -10.0, 50.0)?;
    check_range("outdoor_design_temp", outdoor_temp_c, -50.0, 50.0)?;

    // Absent factors normalize to zero, not to a regional default; defaults
    // are applied when the settings are created.
    let safety_factor_pct = factor("safety_factor_pct", settings.safety_factor_pct, 1.0)?;
    let heat_up_factor_pct = factor("heat_up_factor_pct", settings.heat_up_factor_pct, 1.0)?;
    let psi_allowance_w_per_k = factor(
        "psi_allowance",
        settings.psi_allowance,
        if imperial { units::PSI_IMPERIAL_TO_SI } else { 1.0 },
    )?;
    let mech_vent_m3_per_h = factor(
        "mech_vent",
        settings.mech_vent,
        if imperial { units::CFM_TO_M3_PER_H } else { 1.0 },
    )?;

    let u = merge_u_values(settings, period, imperial)?;

    let preset_ach = if settings.region == Region::Uk
        && settings.standards_mode == StandardsMode::BsEn12831
    {
        period.uk_preset().ach
    } else {
        period.generic_preset().ach
    };
    let ach = match settings.infiltration_ach {
        Some(explicit) => {
            check_non_negative("infiltration_ach", explicit)?;
            explicit
        }
        None => preset_ach,
    };

    Ok(SettingsSi {
        region: settings.region,
        standards_mode: settings.standards_mode,
        insulation_period: period,
        indoor_temp_c,
        outdoor_temp_c,
        safety_factor_pct,
        heat_up_factor_pct,
        psi_allowance_w_per_k,
        mech_vent_m3_per_h,
        ach,
        u,
    })
}

/// Resolve the U-value override chain for one settings object.
fn merge_u_values(
    settings: &ProjectSettings,
    period: InsulationPeriod,
    imperial: bool,
) -> CalcResult<UValuesSi> {
    let base = if settings.region == Region::Uk && settings.standards_mode == StandardsMode::BsEn12831 {
        period.uk_preset()
    } else {
        period.generic_preset()
    };

    let mut u = UValuesSi {
        wall: base.u_wall,
        window: base.u_window,
        door: base.u_door,
        roof: base.u_roof,
        floor: base.u_floor,
    };

    if let Some(glazing) = settings.glazing {
        u.window = glazing.window_u();
    }

    let overrides = [
        ("u_overrides.wall", settings.u_overrides.wall, &mut u.wall),
        ("u_overrides.window", settings.u_overrides.window, &mut u.window),
        ("u_overrides.door", settings.u_overrides.door, &mut u.door),
        ("u_overrides.roof", settings.u_overrides.roof, &mut u.roof),
        ("u_overrides.floor", settings.u_overrides.floor, &mut u.floor),
    ];
    for (field, value, slot) in overrides {
        if let Some(entered) = value {
            check_non_negative(field, entered)?;
            *slot = if imperial {
                units::u_imperial_to_si(entered)
            } else {
                entered
            };
        }
    }

    Ok(u)
}

/// Optional factor: absent means zero, present must be finite and >= 0.
/// `scale` converts entry units to SI.
fn factor(field: &str, value: Option<f64>, scale: f64) -> CalcResult<f64> {
    match value {
        Some(entered) => {
            check_non_negative(field, entered)?;
            Ok(entered * scale)
        }
        None => Ok(0.0),
    }
}

fn check_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be zero or a positive number",
        ));
    }
    Ok(())
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Must be between {min} and {max} °C"),
        ));
    }
    Ok(())
}
