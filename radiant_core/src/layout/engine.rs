//! # Floor Layout Tiling
//!
//! Tiles a rectangular room with catalog blocks and the connector pieces
//! that route the tube between bays. The output is an ordered tile list
//! (placement plus asset key); rendering is the presentation layer's job.
//!
//! Coordinate system: x runs across the joists (columns), y runs down the
//! room length (rows), origin at the first block's top-left corner. End
//! caps and bridges sit half a block outside the tiled field (negative y
//! on top, `rows * block_h - block_h / 2` on the bottom).
//!
//! Whole blocks only: fractional remainders at the far edges stay untiled,
//! matching how the physical product is cut in.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::layout::engine::build_layout;
//! use radiant_core::materials::bands::LoadBand;
//! use radiant_core::presets::{InstallMethod, JoistSpacing};
//!
//! let layout = build_layout(
//!     4.05,
//!     3.05,
//!     JoistSpacing::In16,
//!     LoadBand::LowLoad,
//!     InstallMethod::Drilling,
//! )
//! .unwrap();
//!
//! assert_eq!(layout.cols, 7);
//! assert_eq!(layout.rows, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::layout::assets::{
    end_cap_asset, fin_block_asset, pipe_bridge_asset, BridgeCorner, EndCapEdge,
};
use crate::layout::blocks::{block_size, connector_width_factor};
use crate::materials::bands::LoadBand;
use crate::presets::{InstallMethod, JoistSpacing, Orientation};

/// What a tile is, independent of which SKU renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[serde(rename = "FIN_BLOCK")]
    FinBlock,
    #[serde(rename = "PIPE_BRIDGE")]
    PipeBridge,
    #[serde(rename = "END_CAP")]
    EndCap,
}

/// One placed tile (m)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub x_m: f64,
    pub y_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    /// Catalog asset key, e.g. `PB_16-400_TR`
    pub asset: String,
}

/// Tiled floor plan for one room.
///
/// A room smaller than a single block tiles to an empty layout; that is a
/// valid result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorLayout {
    pub cols: u32,
    pub rows: u32,
    pub block_width_m: f64,
    pub block_height_m: f64,
    /// Width actually covered by whole blocks
    pub overall_width_m: f64,
    /// Length actually covered by whole blocks
    pub overall_height_m: f64,
    pub covered_area_m2: f64,
    /// Fin blocks row-major, then top connectors, then bottom connectors
    pub tiles: Vec<Tile>,
}

/// Tile a room for a joisted install method.
///
/// # Arguments
///
/// * `length_m` / `width_m` - Room dimensions; length runs along the tube
///   serpentine (rows), width across the joists (columns)
/// * `joist` - Joist spacing (sets block width)
/// * `band` - Load band (sets block height via fin spacing)
/// * `method` - Install method; must be a joisted method
///
/// # Returns
///
/// * `Ok(FloorLayout)` - Ordered tiles with asset keys
/// * `Err(CalcError)` - `UnsupportedMethod` for in-slab (slab coils are
///   drawn as continuous runs, not tiles), `InvalidInput` for bad geometry
pub fn build_layout(
    length_m: f64,
    width_m: f64,
    joist: JoistSpacing,
    band: LoadBand,
    method: InstallMethod,
) -> CalcResult<FloorLayout> {
    for (field, value) in [("length_m", length_m), ("width_m", width_m)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Must be a positive number",
            ));
        }
    }

    let orientation = method.orientation();
    if orientation == Orientation::Slab {
        return Err(CalcError::unsupported_method(method.code(), "build_layout"));
    }

    let block = block_size(joist, band);
    let cols = (width_m / block.width_m).floor() as u32;
    let rows = (length_m / block.height_m).floor() as u32;

    let overall_width_m = cols as f64 * block.width_m;
    let overall_height_m = rows as f64 * block.height_m;

    let mut tiles = Vec::new();
    if cols > 0 && rows > 0 {
        let fin_asset = fin_block_asset(joist, band, orientation);
        for r in 0..rows {
            for c in 0..cols {
                tiles.push(Tile {
                    kind: TileKind::FinBlock,
                    x_m: c as f64 * block.width_m,
                    y_m: r as f64 * block.height_m,
                    width_m: block.width_m,
                    height_m: block.height_m,
                    asset: fin_asset.clone(),
                });
            }
        }

        let connector_w = block.width_m * connector_width_factor(joist);
        let connector_x = |c: u32| c as f64 * block.width_m + (block.width_m - connector_w) / 2.0;
        let top_y = -block.height_m * 0.5;
        let bottom_y = rows as f64 * block.height_m - block.height_m * 0.5;

        match orientation {
            Orientation::AcrossJoists => {
                // Every bay is a straight run; both ends get return caps.
                for c in 0..cols {
                    tiles.push(end_cap(joist, EndCapEdge::Top, connector_x(c), top_y, connector_w, block.height_m));
                }
                for c in 0..cols {
                    tiles.push(end_cap(joist, EndCapEdge::Bottom, connector_x(c), bottom_y, connector_w, block.height_m));
                }
            }
            Orientation::WithJoists => {
                // Serpentine: the run enters at the top of column 0, flows
                // down, bridges to the next column, and exits at the bottom
                // of the last column. Even columns flow down.
                for c in 0..cols {
                    if c == 0 {
                        tiles.push(end_cap(joist, EndCapEdge::Top, 0.0, top_y, block.width_m, block.height_m));
                    } else {
                        let prev_is_down = (c - 1) % 2 == 0;
                        let corner = if prev_is_down {
                            BridgeCorner::TopRight
                        } else {
                            BridgeCorner::TopLeft
                        };
                        tiles.push(bridge(joist, corner, connector_x(c), top_y, connector_w, block.height_m));
                    }
                }
                for c in 0..cols {
                    if c == cols - 1 {
                        let x = c as f64 * block.width_m;
                        tiles.push(end_cap(joist, EndCapEdge::Bottom, x, bottom_y, block.width_m, block.height_m));
                    } else {
                        let is_down = c % 2 == 0;
                        let corner = if is_down {
                            BridgeCorner::BottomRight
                        } else {
                            BridgeCorner::BottomLeft
                        };
                        tiles.push(bridge(joist, corner, connector_x(c), bottom_y, connector_w, block.height_m));
                    }
                }
            }
            Orientation::Slab => unreachable!("rejected above"),
        }
    }

    Ok(FloorLayout {
        cols,
        rows,
        block_width_m: block.width_m,
        block_height_m: block.height_m,
        overall_width_m,
        overall_height_m,
        covered_area_m2: overall_width_m * overall_height_m,
        tiles,
    })
}

fn end_cap(joist: JoistSpacing, edge: EndCapEdge, x: f64, y: f64, w: f64, h: f64) -> Tile {
    Tile {
        kind: TileKind::EndCap,
        x_m: x,
        y_m: y,
        width_m: w,
        height_m: h,
        asset: end_cap_asset(joist, edge),
    }
}

fn bridge(joist: JoistSpacing, corner: BridgeCorner, x: f64, y: f64, w: f64, h: f64) -> Tile {
    Tile {
        kind: TileKind::PipeBridge,
        x_m: x,
        y_m: y,
        width_m: w,
        height_m: h,
        asset: pipe_bridge_asset(joist, corner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(layout: &FloorLayout, kind: TileKind) -> usize {
        layout.tiles.iter().filter(|t| t.kind == kind).count()
    }

    #[test]
    fn test_grid_sizing_floors_remainders() {
        // 16" LL block is 0.4 x 0.4; 3.05 / 0.4 = 7.625, 4.05 / 0.4 = 10.125
        let layout = build_layout(
            4.05,
            3.05,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::Drilling,
        )
        .unwrap();

        assert_eq!(layout.cols, 7);
        assert_eq!(layout.rows, 10);
        assert_eq!(count(&layout, TileKind::FinBlock), 70);
        assert!((layout.overall_width_m - 2.8).abs() < 1e-9);
        assert!((layout.overall_height_m - 4.0).abs() < 1e-9);
        assert!((layout.covered_area_m2 - 11.2).abs() < 1e-9);
        // Covered area never exceeds the room
        assert!(layout.covered_area_m2 <= 4.05 * 3.05);
    }

    #[test]
    fn test_across_joists_end_caps() {
        let layout = build_layout(
            4.05,
            3.05,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::Drilling,
        )
        .unwrap();

        // One cap per column per edge, no bridges
        assert_eq!(count(&layout, TileKind::EndCap), 14);
        assert_eq!(count(&layout, TileKind::PipeBridge), 0);

        let caps: Vec<_> = layout
            .tiles
            .iter()
            .filter(|t| t.kind == TileKind::EndCap)
            .collect();
        assert!(caps.iter().all(|t| t.asset.starts_with("EC_16-400_")));

        // Caps sit half a block outside the field
        assert!((caps[0].y_m - (-0.2)).abs() < 1e-9);
        assert!((caps.last().unwrap().y_m - 3.8).abs() < 1e-9);
    }

    #[test]
    fn test_connector_narrowing_on_12in() {
        let layout = build_layout(
            2.05,
            0.95,
            JoistSpacing::In12,
            LoadBand::LowLoad,
            InstallMethod::OpenWeb,
        )
        .unwrap();
        // 0.95 / 0.3 = 3 cols; connector width 0.3 * 0.94, centered
        let cap = layout
            .tiles
            .iter()
            .find(|t| t.kind == TileKind::EndCap)
            .unwrap();
        assert!((cap.width_m - 0.282).abs() < 1e-9);
        assert!((cap.x_m - 0.009).abs() < 1e-9);
    }

    #[test]
    fn test_serpentine_parity() {
        // 16" LL: 2.05 / 0.4 = 5 cols, 0.85 / 0.4 = 2 rows
        let layout = build_layout(
            0.85,
            2.05,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::HangingSnake,
        )
        .unwrap();

        assert_eq!(layout.cols, 5);
        assert_eq!(count(&layout, TileKind::FinBlock), 10);
        assert_eq!(count(&layout, TileKind::EndCap), 2);
        assert_eq!(count(&layout, TileKind::PipeBridge), 8);

        let assets: Vec<&str> = layout.tiles[10..].iter().map(|t| t.asset.as_str()).collect();
        assert_eq!(
            assets,
            vec![
                // Top edge: entry cap, then bridges mirroring the previous
                // column's flow direction
                "EC_16-400_T",
                "PB_16-400_TR",
                "PB_16-400_TL",
                "PB_16-400_TR",
                "PB_16-400_TL",
                // Bottom edge: bridges by own parity, exit cap last
                "PB_16-400_BR",
                "PB_16-400_BL",
                "PB_16-400_BR",
                "PB_16-400_BL",
                "EC_16-400_B",
            ]
        );

        // Full-width caps, narrowed bridges (16" factor is 1.0, so equal
        // here; position distinguishes them)
        let top_cap = &layout.tiles[10];
        assert_eq!(top_cap.x_m, 0.0);
        let bottom_cap = layout.tiles.last().unwrap();
        assert!((bottom_cap.x_m - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_single_column_serpentine_has_no_bridges() {
        let layout = build_layout(
            0.85,
            0.45,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::TopDown,
        )
        .unwrap();
        assert_eq!(layout.cols, 1);
        assert_eq!(count(&layout, TileKind::EndCap), 2);
        assert_eq!(count(&layout, TileKind::PipeBridge), 0);
    }

    #[test]
    fn test_24in_bridge_variants() {
        // 24" LL block is 0.6 x 0.53
        let layout = build_layout(
            1.1,
            1.9,
            JoistSpacing::In24,
            LoadBand::LowLoad,
            InstallMethod::HangingClip,
        )
        .unwrap();
        assert_eq!(layout.cols, 3);

        let bridges: Vec<&str> = layout
            .tiles
            .iter()
            .filter(|t| t.kind == TileKind::PipeBridge)
            .map(|t| t.asset.as_str())
            .collect();
        assert!(!bridges.is_empty());
        assert!(bridges.iter().all(|a| a.ends_with("_TS") || a.ends_with("_BC")));
    }

    #[test]
    fn test_high_output_uses_high_load_block() {
        let high = build_layout(
            4.05,
            3.05,
            JoistSpacing::In16,
            LoadBand::HighOutput,
            InstallMethod::Drilling,
        )
        .unwrap();
        assert!((high.block_height_m - 0.33).abs() < 1e-12);
        // Tighter rows than low load
        assert_eq!(high.rows, 12); // 4.05 / 0.33 = 12.27
        assert!(high.tiles.iter().any(|t| t.asset == "FB_16-400_HL_drilled"));
    }

    #[test]
    fn test_room_smaller_than_block_is_empty() {
        let layout = build_layout(
            0.3,
            0.3,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::Drilling,
        )
        .unwrap();
        assert_eq!(layout.cols, 0);
        assert_eq!(layout.rows, 0);
        assert!(layout.tiles.is_empty());
        assert_eq!(layout.covered_area_m2, 0.0);
    }

    #[test]
    fn test_in_slab_rejected() {
        let err = build_layout(
            4.0,
            3.0,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::InSlab,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_METHOD");
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(build_layout(
                bad,
                3.0,
                JoistSpacing::In16,
                LoadBand::LowLoad,
                InstallMethod::Drilling,
            )
            .is_err());
        }
    }

    #[test]
    fn test_layout_serialization() {
        let layout = build_layout(
            0.85,
            2.05,
            JoistSpacing::In16,
            LoadBand::LowLoad,
            InstallMethod::HangingSnake,
        )
        .unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        assert!(json.contains("FIN_BLOCK"));
        assert!(json.contains("PB_16-400_TR"));
        let roundtrip: FloorLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, roundtrip);
    }
}
