//! # radiant_core - Radiant Floor Heating Design Engine
//!
//! `radiant_core` is the computational heart of Radiant, turning room
//! geometry and project settings into per-room heat loss, supply water
//! temperatures, material take-offs, and installation diagram layouts.
//! All inputs and outputs are JSON-serializable, making it easy to drive
//! from any front end or script.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **SI at the core**: Regional units exist only at the display edges
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Pipeline
//!
//! The five stages run in order, each consuming the previous stage's
//! output: [`normalize`](normalize::normalize) resolves settings to SI,
//! [`calculate_room`] computes the physics, [`select_materials`] sizes
//! the tube and counts parts, [`build_layout`] tiles the install diagram,
//! and [`aggregate`] rolls rooms into a project summary.
//!
//! ## Quick Start
//!
//! ```rust
//! use radiant_core::project::Project;
//!
//! // Create a new project
//! let project = Project::new("Smith Residence", "Warm Floors Ltd", "12 Hill Rd");
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, settings, and room inputs
//! - [`presets`] - Regions, standards, insulation periods, install methods
//! - [`normalize`] - Regional units and preset chains resolved to SI
//! - [`calculations`] - Heat loss and supply water temperature
//! - [`materials`] - Load bands, tube sizing, and material take-offs
//! - [`layout`] - Installation diagram tiling
//! - [`summary`] - Project-level aggregation
//! - [`display`] - Regional display projections and formatting
//! - [`units`] - Conversion factors and helpers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod display;
pub mod errors;
pub mod file_io;
pub mod layout;
pub mod materials;
pub mod normalize;
pub mod presets;
pub mod project;
pub mod summary;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_room, RoomResults};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use layout::{build_layout, FloorLayout};
pub use materials::{select_materials, MaterialSelection};
pub use normalize::{normalize, SettingsSi};
pub use project::{Project, ProjectMetadata, ProjectSettings, RoomInput};
pub use summary::{aggregate, ProjectSummary};
