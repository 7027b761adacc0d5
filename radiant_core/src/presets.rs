//! Regional and Construction Presets
//!
//! Regional defaults, building-age U-value presets, glazing and floor
//! covering properties, and the install-method vocabulary.
//!
//! Preset U-values and air-change rates are design baselines keyed to the
//! construction period; explicit user overrides always win over presets
//! (see `normalize`). Joist spacings carry the product-catalog metric
//! roundings (19" is 488 mm, not 482.6).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Regions
// ============================================================================

/// Measurement system used for entry and display in a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    #[serde(rename = "METRIC")]
    Metric,
    #[serde(rename = "IMPERIAL")]
    Imperial,
}

/// Supported design regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "CA_METRIC")]
    CaMetric,
    #[serde(rename = "CA_IMPERIAL")]
    CaImperial,
}

/// Per-region seed values for new project settings.
///
/// Values are in the region's entry units (imperial regions enter the
/// bridging allowance in BTU/hr·F and mechanical ventilation in CFM);
/// `normalize` converts them exactly like user-entered values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionDefaults {
    pub standards_mode: StandardsMode,
    pub safety_factor_pct: f64,
    pub heat_up_factor_pct: f64,
    pub psi_allowance: f64,
    pub mech_vent: f64,
    pub infiltration_ach: f64,
}

impl Region {
    /// All regions for UI selection
    pub const ALL: [Region; 5] = [
        Region::Uk,
        Region::Us,
        Region::Eu,
        Region::CaMetric,
        Region::CaImperial,
    ];

    /// Get the code string used on the wire (e.g., "UK", "CA_METRIC")
    pub fn code(&self) -> &'static str {
        match self {
            Region::Uk => "UK",
            Region::Us => "US",
            Region::Eu => "EU",
            Region::CaMetric => "CA_METRIC",
            Region::CaImperial => "CA_IMPERIAL",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "_").as_str() {
            "UK" | "GB" | "UNITED_KINGDOM" => Ok(Region::Uk),
            "US" | "USA" | "UNITED_STATES" => Ok(Region::Us),
            "EU" | "EUROPE" | "EUROPEAN_UNION" => Ok(Region::Eu),
            "CA_METRIC" | "CANADA_METRIC" => Ok(Region::CaMetric),
            "CA_IMPERIAL" | "CANADA_IMPERIAL" => Ok(Region::CaImperial),
            _ => Err(CalcError::invalid_input("region", s, "Unknown region")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Uk => "United Kingdom",
            Region::Us => "United States",
            Region::Eu => "European Union",
            Region::CaMetric => "Canada (Metric)",
            Region::CaImperial => "Canada (Imperial)",
        }
    }

    /// Entry/display unit system for this region
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            Region::Us | Region::CaImperial => UnitSystem::Imperial,
            Region::Uk | Region::Eu | Region::CaMetric => UnitSystem::Metric,
        }
    }

    /// Whether the UK/EU standards formulas apply (mechanical ventilation
    /// term, safety and heat-up multipliers)
    pub fn uses_eu_standards(&self) -> bool {
        matches!(self, Region::Uk | Region::Eu)
    }

    /// Seed values for a new project in this region
    pub fn defaults(&self) -> RegionDefaults {
        match self {
            Region::Uk => RegionDefaults {
                standards_mode: StandardsMode::BsEn12831,
                safety_factor_pct: 12.5,
                heat_up_factor_pct: 27.5,
                psi_allowance: 0.04,
                mech_vent: 0.4,
                infiltration_ach: 0.25,
            },
            Region::Us => RegionDefaults {
                standards_mode: StandardsMode::Ashrae,
                safety_factor_pct: 10.0,
                heat_up_factor_pct: 20.0,
                psi_allowance: 0.05,
                mech_vent: 0.5,
                infiltration_ach: 0.35,
            },
            Region::Eu => RegionDefaults {
                standards_mode: StandardsMode::EnIso13790,
                safety_factor_pct: 12.0,
                heat_up_factor_pct: 25.0,
                psi_allowance: 0.035,
                mech_vent: 0.45,
                infiltration_ach: 0.3,
            },
            Region::CaMetric | Region::CaImperial => RegionDefaults {
                standards_mode: StandardsMode::CsaF280,
                safety_factor_pct: 15.0,
                heat_up_factor_pct: 30.0,
                psi_allowance: 0.045,
                mech_vent: 0.4,
                infiltration_ach: 0.3,
            },
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Standards Modes
// ============================================================================

/// Calculation standard governing formula selection and preset overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardsMode {
    #[serde(rename = "GENERIC")]
    Generic,
    #[serde(rename = "BS_EN_12831")]
    BsEn12831,
    #[serde(rename = "ASHRAE")]
    Ashrae,
    #[serde(rename = "EN_ISO_13790")]
    EnIso13790,
    #[serde(rename = "CSA_F280")]
    CsaF280,
}

impl StandardsMode {
    /// All standards modes for UI selection
    pub const ALL: [StandardsMode; 5] = [
        StandardsMode::Generic,
        StandardsMode::BsEn12831,
        StandardsMode::Ashrae,
        StandardsMode::EnIso13790,
        StandardsMode::CsaF280,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StandardsMode::Generic => "Generic",
            StandardsMode::BsEn12831 => "BS EN 12831",
            StandardsMode::Ashrae => "ASHRAE",
            StandardsMode::EnIso13790 => "EN ISO 13790",
            StandardsMode::CsaF280 => "CSA F280",
        }
    }
}

impl std::fmt::Display for StandardsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Insulation Periods
// ============================================================================

/// Baseline fabric values for a construction period.
///
/// U-values in W/m2K, infiltration in air changes per hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodPreset {
    pub u_wall: f64,
    pub u_window: f64,
    pub u_door: f64,
    pub u_roof: f64,
    pub u_floor: f64,
    pub ach: f64,
}

/// Construction period of the building, the primary fabric-quality input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsulationPeriod {
    #[serde(rename = "PRE_1980")]
    Pre1980,
    #[serde(rename = "Y1980_2000")]
    Y1980To2000,
    #[serde(rename = "Y2001_2015")]
    Y2001To2015,
    #[serde(rename = "Y2016_PLUS")]
    Y2016Plus,
}

impl InsulationPeriod {
    /// All periods for UI selection
    pub const ALL: [InsulationPeriod; 4] = [
        InsulationPeriod::Pre1980,
        InsulationPeriod::Y1980To2000,
        InsulationPeriod::Y2001To2015,
        InsulationPeriod::Y2016Plus,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "_").as_str() {
            "PRE_1980" | "PRE1980" | "1979" => Ok(InsulationPeriod::Pre1980),
            "Y1980_2000" | "1980_2000" | "1980" => Ok(InsulationPeriod::Y1980To2000),
            "Y2001_2015" | "2001_2015" | "2001" => Ok(InsulationPeriod::Y2001To2015),
            "Y2016_PLUS" | "2016_PLUS" | "2016" | "2016+" => Ok(InsulationPeriod::Y2016Plus),
            _ => Err(CalcError::invalid_input(
                "insulation_period",
                s,
                "Unknown construction period",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationPeriod::Pre1980 => "Pre-1980",
            InsulationPeriod::Y1980To2000 => "1980-2000",
            InsulationPeriod::Y2001To2015 => "2001-2015",
            InsulationPeriod::Y2016Plus => "2016 or later",
        }
    }

    /// Generic period preset, applicable in every region
    pub fn generic_preset(&self) -> PeriodPreset {
        match self {
            InsulationPeriod::Pre1980 => PeriodPreset {
                u_wall: 0.8,
                u_window: 3.0,
                u_door: 2.0,
                u_roof: 0.6,
                u_floor: 0.6,
                ach: 1.0,
            },
            InsulationPeriod::Y1980To2000 => PeriodPreset {
                u_wall: 0.6,
                u_window: 2.5,
                u_door: 1.8,
                u_roof: 0.45,
                u_floor: 0.5,
                ach: 0.7,
            },
            InsulationPeriod::Y2001To2015 => PeriodPreset {
                u_wall: 0.35,
                u_window: 2.0,
                u_door: 1.6,
                u_roof: 0.25,
                u_floor: 0.35,
                ach: 0.5,
            },
            InsulationPeriod::Y2016Plus => PeriodPreset {
                u_wall: 0.25,
                u_window: 1.6,
                u_door: 1.2,
                u_roof: 0.18,
                u_floor: 0.25,
                ach: 0.35,
            },
        }
    }

    /// UK building-stock preset, applied on top of the generic preset when
    /// the project runs in BS EN 12831 mode. The published tables currently
    /// match the generic values; the override hook is the normative part.
    pub fn uk_preset(&self) -> PeriodPreset {
        self.generic_preset()
    }
}

impl std::fmt::Display for InsulationPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Glazing
// ============================================================================

/// Window glazing type, a shortcut for the window U-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlazingType {
    #[serde(rename = "SINGLE")]
    Single,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "TRIPLE")]
    Triple,
}

impl GlazingType {
    /// All glazing types for UI selection
    pub const ALL: [GlazingType; 3] = [
        GlazingType::Single,
        GlazingType::Double,
        GlazingType::Triple,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().as_str() {
            "SINGLE" | "1" => Ok(GlazingType::Single),
            "DOUBLE" | "2" => Ok(GlazingType::Double),
            "TRIPLE" | "3" => Ok(GlazingType::Triple),
            _ => Err(CalcError::invalid_input("glazing", s, "Unknown glazing type")),
        }
    }

    /// Window U-value implied by the glazing (W/m2K)
    pub fn window_u(&self) -> f64 {
        match self {
            GlazingType::Single => 5.0,
            GlazingType::Double => 2.7,
            GlazingType::Triple => 1.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GlazingType::Single => "Single glazed",
            GlazingType::Double => "Double glazed",
            GlazingType::Triple => "Triple glazed",
        }
    }
}

impl std::fmt::Display for GlazingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Floor Coverings
// ============================================================================

/// Finished floor covering above the heated layer.
///
/// The covering adds thermal resistance between the tube and the room, so
/// higher-R coverings push the required water temperature up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorCover {
    #[serde(rename = "TILE_STONE")]
    TileStone,
    #[serde(rename = "VINYL_LVT")]
    VinylLvt,
    #[serde(rename = "LAMINATE")]
    Laminate,
    #[serde(rename = "ENGINEERED_WOOD")]
    EngineeredWood,
    #[serde(rename = "SOLID_WOOD")]
    SolidWood,
    #[serde(rename = "CARPET_LOW_PAD")]
    CarpetLowPad,
    #[serde(rename = "CARPET_HIGH_PAD")]
    CarpetHighPad,
}

impl FloorCover {
    /// All floor coverings for UI selection
    pub const ALL: [FloorCover; 7] = [
        FloorCover::TileStone,
        FloorCover::VinylLvt,
        FloorCover::Laminate,
        FloorCover::EngineeredWood,
        FloorCover::SolidWood,
        FloorCover::CarpetLowPad,
        FloorCover::CarpetHighPad,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '/'], "_").as_str() {
            "TILE_STONE" | "TILE" | "STONE" => Ok(FloorCover::TileStone),
            "VINYL_LVT" | "VINYL" | "LVT" => Ok(FloorCover::VinylLvt),
            "LAMINATE" => Ok(FloorCover::Laminate),
            "ENGINEERED_WOOD" | "ENGINEERED" => Ok(FloorCover::EngineeredWood),
            "SOLID_WOOD" | "HARDWOOD" => Ok(FloorCover::SolidWood),
            "CARPET_LOW_PAD" | "CARPET_LOW" => Ok(FloorCover::CarpetLowPad),
            "CARPET_HIGH_PAD" | "CARPET_HIGH" | "CARPET" => Ok(FloorCover::CarpetHighPad),
            _ => Err(CalcError::invalid_input(
                "floor_cover",
                s,
                "Unknown floor covering",
            )),
        }
    }

    /// Thermal resistance of the covering (m2K/W)
    pub fn r_value(&self) -> f64 {
        match self {
            FloorCover::TileStone => 0.01,
            FloorCover::VinylLvt => 0.02,
            FloorCover::Laminate => 0.03,
            FloorCover::EngineeredWood => 0.05,
            FloorCover::SolidWood => 0.07,
            FloorCover::CarpetLowPad => 0.10,
            FloorCover::CarpetHighPad => 0.15,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FloorCover::TileStone => "Tile / Stone",
            FloorCover::VinylLvt => "Vinyl / LVT",
            FloorCover::Laminate => "Laminate",
            FloorCover::EngineeredWood => "Engineered wood",
            FloorCover::SolidWood => "Solid wood",
            FloorCover::CarpetLowPad => "Carpet (low tog pad)",
            FloorCover::CarpetHighPad => "Carpet (high tog pad)",
        }
    }
}

impl std::fmt::Display for FloorCover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Joist Spacing
// ============================================================================

/// Joist spacing on centers. Metric values are the product-catalog
/// roundings, which the fin and plate SKUs are cut to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoistSpacing {
    #[serde(rename = "12")]
    In12,
    #[serde(rename = "16")]
    In16,
    #[serde(rename = "19")]
    In19,
    #[serde(rename = "24")]
    In24,
}

impl JoistSpacing {
    /// All joist spacings for UI selection
    pub const ALL: [JoistSpacing; 4] = [
        JoistSpacing::In12,
        JoistSpacing::In16,
        JoistSpacing::In19,
        JoistSpacing::In24,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().trim_end_matches('"').trim_end_matches("in") {
            "12" | "300" => Ok(JoistSpacing::In12),
            "16" | "400" => Ok(JoistSpacing::In16),
            "19" | "19.2" | "488" => Ok(JoistSpacing::In19),
            "24" | "600" => Ok(JoistSpacing::In24),
            _ => Err(CalcError::invalid_input(
                "joist_spacing",
                s,
                "Expected 12, 16, 19 or 24 inch centers",
            )),
        }
    }

    /// Nominal spacing in inches
    pub fn inches(&self) -> u32 {
        match self {
            JoistSpacing::In12 => 12,
            JoistSpacing::In16 => 16,
            JoistSpacing::In19 => 19,
            JoistSpacing::In24 => 24,
        }
    }

    /// Catalog bay width in millimeters
    pub fn catalog_mm(&self) -> u32 {
        match self {
            JoistSpacing::In12 => 300,
            JoistSpacing::In16 => 400,
            JoistSpacing::In19 => 488,
            JoistSpacing::In24 => 600,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            JoistSpacing::In12 => "12\" (300 mm)",
            JoistSpacing::In16 => "16\" (400 mm)",
            JoistSpacing::In19 => "19.2\" (488 mm)",
            JoistSpacing::In24 => "24\" (600 mm)",
        }
    }
}

impl std::fmt::Display for JoistSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Install Methods
// ============================================================================

/// Tube run direction relative to the joists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "ACROSS_JOISTS")]
    AcrossJoists,
    #[serde(rename = "WITH_JOISTS")]
    WithJoists,
    #[serde(rename = "SLAB")]
    Slab,
}

/// How the tubing is installed in the floor assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallMethod {
    #[serde(rename = "DRILLING")]
    Drilling,
    #[serde(rename = "OPEN_WEB")]
    OpenWeb,
    #[serde(rename = "HANGING_SNAKE")]
    HangingSnake,
    #[serde(rename = "HANGING_CLIP")]
    HangingClip,
    #[serde(rename = "TOP_DOWN")]
    TopDown,
    #[serde(rename = "IN_SLAB")]
    InSlab,
}

impl InstallMethod {
    /// All install methods for UI selection
    pub const ALL: [InstallMethod; 6] = [
        InstallMethod::Drilling,
        InstallMethod::OpenWeb,
        InstallMethod::HangingSnake,
        InstallMethod::HangingClip,
        InstallMethod::TopDown,
        InstallMethod::InSlab,
    ];

    /// Get the code string used on the wire (e.g., "OPEN_WEB")
    pub fn code(&self) -> &'static str {
        match self {
            InstallMethod::Drilling => "DRILLING",
            InstallMethod::OpenWeb => "OPEN_WEB",
            InstallMethod::HangingSnake => "HANGING_SNAKE",
            InstallMethod::HangingClip => "HANGING_CLIP",
            InstallMethod::TopDown => "TOP_DOWN",
            InstallMethod::InSlab => "IN_SLAB",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "_").as_str() {
            "DRILLING" | "DRILLED" => Ok(InstallMethod::Drilling),
            "OPEN_WEB" | "OPENWEB" => Ok(InstallMethod::OpenWeb),
            "HANGING_SNAKE" | "SNAKE" => Ok(InstallMethod::HangingSnake),
            "HANGING_CLIP" | "CLIP" => Ok(InstallMethod::HangingClip),
            "TOP_DOWN" | "TOPDOWN" => Ok(InstallMethod::TopDown),
            "IN_SLAB" | "INSLAB" | "SLAB" => Ok(InstallMethod::InSlab),
            _ => Err(CalcError::invalid_input(
                "install_method",
                s,
                "Unknown install method",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallMethod::Drilling => "Drilled joists",
            InstallMethod::OpenWeb => "Open-web joists",
            InstallMethod::HangingSnake => "Hanging (snake)",
            InstallMethod::HangingClip => "Hanging (clip rail)",
            InstallMethod::TopDown => "Top-down",
            InstallMethod::InSlab => "In-slab",
        }
    }

    /// Tube run direction for this method
    pub fn orientation(&self) -> Orientation {
        match self {
            InstallMethod::Drilling | InstallMethod::OpenWeb => Orientation::AcrossJoists,
            InstallMethod::HangingSnake | InstallMethod::HangingClip | InstallMethod::TopDown => {
                Orientation::WithJoists
            }
            InstallMethod::InSlab => Orientation::Slab,
        }
    }

    /// Joist spacing is required for every joisted method
    pub fn requires_joist_spacing(&self) -> bool {
        !matches!(self, InstallMethod::InSlab)
    }
}

impl std::fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
