//! Block Geometry
//!
//! A layout is tiled from catalog blocks: one block is one joist bay wide
//! and one fin spacing tall. Connector tiles (end caps, pipe bridges) are
//! narrowed by a per-joist factor so the tube exits clear the joist edge.

use serde::{Deserialize, Serialize};

use crate::materials::bands::LoadBand;
use crate::materials::spacing::fin_spacing_mm;
use crate::presets::JoistSpacing;

/// One tileable catalog block (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    pub width_m: f64,
    pub height_m: f64,
}

/// Block footprint for a joist spacing and load band.
///
/// Width is the catalog bay width; height is the fin spacing for the band
/// (high-output rooms tile with the high-load block).
pub fn block_size(joist: JoistSpacing, band: LoadBand) -> BlockSize {
    BlockSize {
        width_m: joist.catalog_mm() as f64 / 1000.0,
        height_m: fin_spacing_mm(joist, band) as f64 / 1000.0,
    }
}

/// Connector width as a fraction of the bay width
pub fn connector_width_factor(joist: JoistSpacing) -> f64 {
    match joist {
        JoistSpacing::In12 => 0.94,
        JoistSpacing::In16 => 1.0,
        JoistSpacing::In19 => 0.97,
        JoistSpacing::In24 => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sizes() {
        let b = block_size(JoistSpacing::In16, LoadBand::LowLoad);
        assert!((b.width_m - 0.4).abs() < 1e-12);
        assert!((b.height_m - 0.4).abs() < 1e-12);

        let b = block_size(JoistSpacing::In19, LoadBand::HighLoad);
        assert!((b.width_m - 0.488).abs() < 1e-12);
        assert!((b.height_m - 0.28).abs() < 1e-12);

        // High output tiles with the high-load block
        assert_eq!(
            block_size(JoistSpacing::In12, LoadBand::HighOutput),
            block_size(JoistSpacing::In12, LoadBand::HighLoad)
        );
    }

    #[test]
    fn test_connector_factors() {
        assert_eq!(connector_width_factor(JoistSpacing::In12), 0.94);
        assert_eq!(connector_width_factor(JoistSpacing::In16), 1.0);
        assert_eq!(connector_width_factor(JoistSpacing::In19), 0.97);
        assert_eq!(connector_width_factor(JoistSpacing::In24), 1.0);
    }
}
