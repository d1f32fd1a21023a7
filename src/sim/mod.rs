//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Caller-supplied time step only
//! - Stable block order (grid order, removal never reorders)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{below_floor, hits_ceiling, hits_side_wall, overlaps};
pub use rect::Rect;
pub use state::{BLOCK_COLORS, Color, Entity, GameState, GameStatus, generate_blocks};
pub use tick::step;
