//! # Project Data Structures
//!
//! The `Project` struct is the root container for a heating design job.
//! Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (id, version, job info, timestamps)
//! ├── settings: ProjectSettings (region, standards, temperatures, overrides)
//! └── rooms: Vec<RoomInput> (ordered; the room name is the user-facing id)
//! ```
//!
//! Settings values are entered in the region's own units (imperial regions
//! enter °F, CFM, BTU/hr·F); `normalize` produces the SI projection the
//! calculators run on. Room geometry is always SI.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::project::Project;
//!
//! let project = Project::new("Smith Residence", "Warmline Ltd", "12 Elm St");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::presets::{
    FloorCover, GlazingType, InstallMethod, InsulationPeriod, JoistSpacing, Region, StandardsMode,
    UnitSystem,
};

/// Current schema version for saved project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Rooms are stored in entry order; names are the user-facing identifier
/// and appear as prefixes in aggregated warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (id, version, job info)
    pub meta: ProjectMetadata,

    /// Project-wide design settings
    pub settings: ProjectSettings,

    /// All rooms in the project
    pub rooms: Vec<RoomInput>,
}

impl Project {
    /// Create a new empty project with US-region defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use radiant_core::project::Project;
    ///
    /// let project = Project::new("Smith Residence", "Warmline Ltd", "12 Elm St");
    /// assert_eq!(project.meta.name, "Smith Residence");
    /// ```
    pub fn new(name: impl Into<String>, contractor: impl Into<String>, address: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                id: Uuid::new_v4(),
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                contractor: contractor.into(),
                address: address.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::new_for_region(Region::Us),
            rooms: Vec::new(),
        }
    }

    /// Add a room to the project.
    pub fn add_room(&mut self, room: RoomInput) {
        self.rooms.push(room);
        self.touch();
    }

    /// Remove a room by name. Returns the removed room if it existed.
    pub fn remove_room(&mut self, name: &str) -> Option<RoomInput> {
        let pos = self.rooms.iter().position(|r| r.name == name)?;
        let room = self.rooms.remove(pos);
        self.touch();
        Some(room)
    }

    /// Get a room by name.
    pub fn get_room(&self, name: &str) -> Option<&RoomInput> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Normalize settings and aggregate every room into a project summary.
    pub fn summary(&self) -> CalcResult<crate::summary::ProjectSummary> {
        let si = crate::normalize::normalize(&self.settings)?;
        crate::summary::aggregate(&self.rooms, &si)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Stable project identifier
    pub id: Uuid,

    /// Schema version (for migration compatibility)
    pub version: String,

    /// Job/site name
    pub name: String,

    /// Installing contractor
    pub contractor: String,

    /// Site address
    pub address: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Project-wide design settings, in the region's entry units.
///
/// Imperial regions (US, Canada imperial) enter temperatures in °F,
/// mechanical ventilation in CFM, the bridging allowance in BTU/hr·F and
/// U-value overrides in BTU/hr·ft2·F. Metric regions enter SI directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub region: Region,
    pub standards_mode: StandardsMode,

    /// Construction period driving the fabric presets. Required before
    /// any calculation can run.
    pub insulation_period: Option<InsulationPeriod>,

    /// Dominant window glazing; overrides the period's window U-value
    pub glazing: Option<GlazingType>,

    /// Indoor design temperature (entry units)
    pub indoor_temp: f64,

    /// Outdoor design temperature (entry units). Required before any
    /// calculation can run.
    pub outdoor_design_temp: Option<f64>,

    // === Standards factors ===
    pub safety_factor_pct: Option<f64>,
    pub heat_up_factor_pct: Option<f64>,

    /// Thermal bridging allowance per kelvin (entry units)
    pub psi_allowance: Option<f64>,

    /// Whole-dwelling mechanical ventilation rate (entry units)
    pub mech_vent: Option<f64>,

    /// Explicit infiltration rate, overriding the period preset (ACH)
    pub infiltration_ach: Option<f64>,

    /// Explicit fabric U-value overrides (entry units)
    pub u_overrides: UValueOverrides,
}

impl ProjectSettings {
    /// Settings seeded from the region's defaults. The insulation period
    /// and outdoor design temperature start unset and must be chosen
    /// before calculations run.
    pub fn new_for_region(region: Region) -> Self {
        let defaults = region.defaults();
        let indoor_temp = match region.unit_system() {
            UnitSystem::Metric => 21.0,
            UnitSystem::Imperial => 70.0,
        };
        ProjectSettings {
            region,
            standards_mode: defaults.standards_mode,
            insulation_period: None,
            glazing: None,
            indoor_temp,
            outdoor_design_temp: None,
            safety_factor_pct: Some(defaults.safety_factor_pct),
            heat_up_factor_pct: Some(defaults.heat_up_factor_pct),
            psi_allowance: Some(defaults.psi_allowance),
            mech_vent: Some(defaults.mech_vent),
            infiltration_ach: None,
            u_overrides: UValueOverrides::default(),
        }
    }
}

/// Explicit fabric U-value overrides. `None` means "use the preset".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UValueOverrides {
    pub wall: Option<f64>,
    pub window: Option<f64>,
    pub door: Option<f64>,
    pub roof: Option<f64>,
    pub floor: Option<f64>,
}

/// A single room's geometry and install selections. Geometry is SI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInput {
    /// Room name (user-facing identifier, e.g. "Kitchen")
    pub name: String,

    // === Geometry (m / m2) ===
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,

    /// Total run of exterior wall in this room
    pub exterior_wall_length_m: f64,
    pub window_area_m2: f64,
    pub door_area_m2: f64,

    // === Exposure ===
    /// Ceiling faces unheated space or outside
    pub ceiling_exposed: bool,
    /// Floor faces unheated space or outside
    pub floor_exposed: bool,
    /// Floor is slab-on-grade (adds the ground loss term)
    pub floor_on_ground: bool,

    /// Per-room setpoint; falls back to the project indoor temperature (°C)
    pub setpoint_c: Option<f64>,

    // === Install selections ===
    pub install_method: InstallMethod,
    /// Required for every joisted method; ignored for in-slab
    pub joist_spacing: Option<JoistSpacing>,
    pub floor_cover: Option<FloorCover>,
}

impl RoomInput {
    /// Floor area in m2
    pub fn floor_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Validate geometry and setpoint bounds.
    ///
    /// Non-finite values are rejected here so NaN can never enter the
    /// calculation pipeline.
    pub fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::missing_field("name"));
        }

        let positive = [
            ("length_m", self.length_m),
            ("width_m", self.width_m),
            ("height_m", self.height_m),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }

        let non_negative = [
            ("exterior_wall_length_m", self.exterior_wall_length_m),
            ("window_area_m2", self.window_area_m2),
            ("door_area_m2", self.door_area_m2),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be zero or a positive number",
                ));
            }
        }

        if let Some(setpoint) = self.setpoint_c {
            if !setpoint.is_finite() || !(-50.0..=50.0).contains(&setpoint) {
                return Err(CalcError::invalid_input(
                    "setpoint_c",
                    setpoint.to_string(),
                    "Setpoint must be between -50 and 50 °C",
                ));
            }
        }

        Ok(())
    }
}
