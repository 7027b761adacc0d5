//! # Materials
//!
//! Load banding, tube sizing, spacing and coverage tables, and the
//! per-room material take-off built from them.

pub mod bands;
pub mod selection;
pub mod spacing;

pub use bands::{supplemental_recommended, LoadBand, TubeSize};
pub use selection::{select_materials, MaterialSelection};
