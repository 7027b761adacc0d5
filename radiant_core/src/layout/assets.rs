//! Asset Key Resolution
//!
//! Maps tile placements to catalog asset keys. Keys are stable lookup
//! strings (`FB_16-400_LL_drilled`); turning them into file paths or SVG
//! handles is the presentation layer's concern.
//!
//! The 24" product line has no cornered bridge SKUs; its serpentine turns
//! use the side (top) and center (bottom) variants instead.

use crate::materials::bands::LoadBand;
use crate::presets::{JoistSpacing, Orientation};

/// Serpentine turn position for a pipe bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl BridgeCorner {
    fn code(&self) -> &'static str {
        match self {
            BridgeCorner::TopLeft => "TL",
            BridgeCorner::TopRight => "TR",
            BridgeCorner::BottomLeft => "BL",
            BridgeCorner::BottomRight => "BR",
        }
    }

    /// 24" substitution: top corners map to the side variant, bottom
    /// corners to the center variant
    fn code_24(&self) -> &'static str {
        match self {
            BridgeCorner::TopLeft | BridgeCorner::TopRight => "TS",
            BridgeCorner::BottomLeft | BridgeCorner::BottomRight => "BC",
        }
    }
}

/// Edge an end cap sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCapEdge {
    Top,
    Bottom,
}

impl EndCapEdge {
    fn code(&self) -> &'static str {
        match self {
            EndCapEdge::Top => "T",
            EndCapEdge::Bottom => "B",
        }
    }
}

fn joist_tag(joist: JoistSpacing) -> String {
    format!("{}-{}", joist.inches(), joist.catalog_mm())
}

/// Fin block key, e.g. `FB_16-400_LL_drilled`
pub fn fin_block_asset(joist: JoistSpacing, band: LoadBand, orientation: Orientation) -> String {
    let load = if band.uses_high_tables() { "HL" } else { "LL" };
    let run = match orientation {
        Orientation::AcrossJoists => "drilled",
        Orientation::WithJoists | Orientation::Slab => "parallel",
    };
    format!("FB_{}_{}_{}", joist_tag(joist), load, run)
}

/// Pipe bridge key, e.g. `PB_16-400_TR` (`PB_24-600_TS` on 24" centers)
pub fn pipe_bridge_asset(joist: JoistSpacing, corner: BridgeCorner) -> String {
    let code = if joist == JoistSpacing::In24 {
        corner.code_24()
    } else {
        corner.code()
    };
    format!("PB_{}_{}", joist_tag(joist), code)
}

/// End cap key, e.g. `EC_16-400_T`
pub fn end_cap_asset(joist: JoistSpacing, edge: EndCapEdge) -> String {
    format!("EC_{}_{}", joist_tag(joist), edge.code())
}
