//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time comes from `tick`, never from a wall clock
//! - Stable iteration order (by entity index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod step;

pub use collision::{CollisionSummary, entity_rect, resolve_collisions};
pub use rect::{EntitySizes, Rect, Viewport};
pub use state::{
    Cues, EntityId, Food, FoodState, GameEvent, GamePhase, GameState, RngState, Tone, Waveform,
};
pub use step::{move_player, restart, tick};
