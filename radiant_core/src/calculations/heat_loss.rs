//! # Room Heat-Loss Calculation
//!
//! Computes a room's design heat loss from its geometry, the resolved SI
//! settings, and its exposure flags, then derives the load density and the
//! required supply water temperature.
//!
//! ## Model
//!
//! - Fabric conduction through exterior wall, windows, doors, and exposed
//!   ceiling/floor: `Q = U × A × ΔT` per element.
//! - Ventilation from infiltration air changes over the occupied volume
//!   (room air above 2.4 m does not count), plus the mechanical ventilation
//!   term in UK/EU standards modes.
//! - Thermal bridging as a flat psi allowance per kelvin.
//! - Ground contact loss for slab-on-grade floors.
//! - UK/EU standards apply the safety and heat-up multipliers; other
//!   regions report the raw total.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::calculations::heat_loss::calculate_room;
//! use radiant_core::normalize::normalize;
//! use radiant_core::presets::{InstallMethod, InsulationPeriod, JoistSpacing, Region};
//! use radiant_core::project::{ProjectSettings, RoomInput};
//!
//! let mut settings = ProjectSettings::new_for_region(Region::Uk);
//! settings.insulation_period = Some(InsulationPeriod::Pre1980);
//! settings.outdoor_design_temp = Some(-5.0);
//! let si = normalize(&settings).unwrap();
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
//! let results = calculate_room(&room, &si).unwrap();
//! assert!(results.q_fabric_w > results.q_vent_w);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::water_temp;
use crate::errors::CalcResult;
use crate::materials::bands::{LoadBand, MAX_W_PER_M2_HIGH_LOAD};
use crate::normalize::SettingsSi;
use crate::presets::InstallMethod;
use crate::project::RoomInput;

/// Air above this height does not take part in the heating design volume (m)
pub const OCCUPIED_HEIGHT_CAP_M: f64 = 2.4;

/// Ventilation coefficient under BS EN 12831 / EN ISO 13790 (Wh/m3K)
const VENT_FACTOR_EU: f64 = 0.34;

/// Ventilation coefficient elsewhere (Wh/m3K)
const VENT_FACTOR_GENERIC: f64 = 0.33;

/// Equivalent U-value for slab-on-grade ground contact (W/m2K)
const GROUND_CONTACT_U: f64 = 0.1;

/// Results of the room heat-loss calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "q_fabric_w": 435.2,
///   "q_vent_w": 258.1,
///   "q_psi_w": 1.0,
///   "q_ground_w": 0.0,
///   "q_before_factors_w": 694.4,
///   "q_after_factors_w": 996.0,
///   "load_w_per_m2": 83.0,
///   "water_temp_c": 45.5,
///   "cover_r_value": null,
///   "cover_u_value": null,
///   "warnings": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResults {
    // === Loss Components (W) ===
    /// Conduction through walls, windows, doors, exposed ceiling/floor
    pub q_fabric_w: f64,

    /// Infiltration and mechanical ventilation
    pub q_vent_w: f64,

    /// Thermal bridging allowance
    pub q_psi_w: f64,

    /// Slab-on-grade ground contact
    pub q_ground_w: f64,

    // === Totals (W) ===
    /// Sum of components before standards factors
    pub q_before_factors_w: f64,

    /// Design heat loss after safety and heat-up factors (the sizing value)
    pub q_after_factors_w: f64,

    // === Design Density ===
    /// Design heat loss per square meter of floor
    pub load_w_per_m2: f64,

    // === Supply Water ===
    /// Required supply water temperature
    pub water_temp_c: f64,

    // === Floor Covering (echoed back for reports) ===
    /// Covering thermal resistance (m2K/W), when a covering is selected
    pub cover_r_value: Option<f64>,

    /// Covering conductance 1/R (W/m2K), when a covering is selected
    pub cover_u_value: Option<f64>,

    // === Diagnostics ===
    /// Human-readable advisories (high load, etc.)
    pub warnings: Vec<String>,
}

/// Calculate a room's design heat loss and supply water temperature.
///
/// Pure function of its inputs: equal inputs produce equal results.
///
/// # Arguments
///
/// * `room` - Room geometry, exposure flags and install selections (SI)
/// * `settings` - Normalized project settings from [`crate::normalize::normalize`]
///
/// # Returns
///
/// * `Ok(RoomResults)` - Loss breakdown, load density, water temperature
/// * `Err(CalcError)` - Structured error if the room fails validation
pub fn calculate_room(room: &RoomInput, settings: &SettingsSi) -> CalcResult<RoomResults> {
    room.validate()?;

    let indoor_c = room.setpoint_c.unwrap_or(settings.indoor_temp_c);
    let delta_t = indoor_c - settings.outdoor_temp_c;

    let floor_area = room.floor_area_m2();
    let occupied_height = room.height_m.min(OCCUPIED_HEIGHT_CAP_M);
    let volume = floor_area * occupied_height;

    // === Fabric ===
    let wall_area =
        (room.exterior_wall_length_m * room.height_m - room.window_area_m2 - room.door_area_m2)
            .max(0.0);
    let q_wall = settings.u.wall * wall_area * delta_t;
    let q_window = settings.u.window * room.window_area_m2 * delta_t;
    let q_door = settings.u.door * room.door_area_m2 * delta_t;
    let q_ceiling = if room.ceiling_exposed {
        settings.u.roof * floor_area * delta_t
    } else {
        0.0
    };
    let q_floor = if room.floor_exposed {
        settings.u.floor * floor_area * delta_t
    } else {
        0.0
    };
    let q_fabric_w = q_wall + q_window + q_door + q_ceiling + q_floor;

    // === Ventilation ===
    let q_vent_w = if settings.region.uses_eu_standards() {
        VENT_FACTOR_EU * settings.ach * volume * delta_t
            + VENT_FACTOR_EU * settings.mech_vent_m3_per_h * delta_t
    } else {
        VENT_FACTOR_GENERIC * settings.ach * volume * delta_t
    };

    // === Bridging and Ground ===
    let q_psi_w = settings.psi_allowance_w_per_k * delta_t;
    let q_ground_w = if room.floor_on_ground {
        GROUND_CONTACT_U * floor_area * delta_t
    } else {
        0.0
    };

    let q_before_factors_w = q_fabric_w + q_vent_w + q_psi_w + q_ground_w;
    let q_after_factors_w = if settings.region.uses_eu_standards() {
        q_before_factors_w
            * (1.0 + settings.safety_factor_pct / 100.0)
            * (1.0 + settings.heat_up_factor_pct / 100.0)
    } else {
        q_before_factors_w
    };

    let load_w_per_m2 = q_after_factors_w / floor_area;

    // === Supply Water ===
    let cover_r_value = room.floor_cover.map(|c| c.r_value());
    let water_temp_c = if room.install_method == InstallMethod::InSlab {
        water_temp::in_slab_supply_temp_c(LoadBand::classify_w_per_m2(load_w_per_m2))
    } else {
        let base = water_temp::interpolate_supply_temp_c(load_w_per_m2);
        match cover_r_value {
            Some(r) => base + water_temp::cover_bonus_c(r),
            None => base,
        }
    };

    let mut warnings = Vec::new();
    if load_w_per_m2 > MAX_W_PER_M2_HIGH_LOAD {
        warnings.push("High load - supplemental heat may be required.".to_string());
    }

    Ok(RoomResults {
        q_fabric_w,
        q_vent_w,
        q_psi_w,
        q_ground_w,
        q_before_factors_w,
        q_after_factors_w,
        load_w_per_m2,
        water_temp_c,
        cover_r_value,
        cover_u_value: cover_r_value.map(|r| 1.0 / r),
        warnings,
    })
}
