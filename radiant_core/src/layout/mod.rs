//! # Floor Layout
//!
//! Block geometry and the tiling engine that turns a room rectangle into
//! a placeable tile list for joisted install methods.

pub mod assets;
pub mod blocks;
pub mod engine;

pub use assets::{end_cap_asset, fin_block_asset, pipe_bridge_asset, BridgeCorner, EndCapEdge};
pub use blocks::{block_size, connector_width_factor, BlockSize};
pub use engine::{build_layout, FloorLayout, Tile, TileKind};
