//! # Calculation Modules
//!
//! Room-level physics: heat loss and supply water temperature. Both are
//! pure functions over validated inputs; all lookup data they use is
//! compiled in.

pub mod heat_loss;
pub mod water_temp;

pub use heat_loss::{calculate_room, RoomResults, OCCUPIED_HEIGHT_CAP_M};
pub use water_temp::{cover_bonus_c, in_slab_supply_temp_c, interpolate_supply_temp_c};
