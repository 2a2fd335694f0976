//! Cat Home - a tiny browser arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `game`: Controller that owns the state and drives a presenter
//! - `presenter`: Presentation adapter contract (render, tones, overlays)
//! - `input`: Keyboard / on-screen control mapping
//! - `settings`: Data-driven configuration
//! - `audio`, `dom`: Browser-only glue (wasm32)

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod game;
pub mod input;
pub mod presenter;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::Direction;
pub use presenter::{EntityId, LogPresenter, Presenter, Tone, Waveform};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Player spawn point (percent of the play area)
    pub const PLAYER_START: Vec2 = Vec2::new(50.0, 50.0);
    /// Distance covered by one directional input (percent)
    pub const STEP: f32 = 2.0;
    /// Playable range on each axis (percent)
    pub const POSITION_MIN: f32 = 0.0;
    pub const POSITION_MAX: f32 = 100.0;
    /// Relocated entities land in [0, RELOCATE_MAX) on each axis, away from the far edges
    pub const RELOCATE_MAX: f32 = 80.0;

    pub const START_LIVES: u8 = 3;
    pub const HOME_SCORE: u64 = 100;
    pub const FOOD_SCORE: u64 = 10;

    /// Home starts in the top-right corner
    pub const HOME_START: Vec2 = Vec2::new(85.0, 10.0);
    /// Obstacle layout on a fresh run
    pub const OBSTACLE_STARTS: [Vec2; 4] = [
        Vec2::new(30.0, 20.0),
        Vec2::new(60.0, 40.0),
        Vec2::new(20.0, 70.0),
        Vec2::new(80.0, 50.0),
    ];

    /// Time a collected food stays hidden (ms)
    pub const FOOD_RESPAWN_MS: f64 = 3000.0;
    /// Home "scale up" cue after a visit (ms)
    pub const HOME_PULSE_MS: f64 = 300.0;
    /// Red flash after losing a life (ms)
    pub const HIT_FLASH_MS: f64 = 500.0;

    /// Idle bobbing of the home marker
    pub const HOME_FLOAT_AMPLITUDE_PX: f32 = 5.0;
    pub const HOME_FLOAT_PERIOD_MS: f64 = 1000.0;
}

/// Clamp a percentage position into the playable square
#[inline]
pub fn clamp_to_arena(pos: Vec2) -> Vec2 {
    pos.clamp(
        Vec2::splat(consts::POSITION_MIN),
        Vec2::splat(consts::POSITION_MAX),
    )
}

/// Vertical bob of the home marker at a given clock time (pixels)
#[inline]
pub fn home_float_offset(clock_ms: f64) -> f32 {
    (clock_ms / consts::HOME_FLOAT_PERIOD_MS).sin() as f32 * consts::HOME_FLOAT_AMPLITUDE_PX
}

/// Parse a CSS percentage such as `"30%"` or `" 12.5 % "`
pub fn parse_percent(value: &str) -> Option<f32> {
    let number = value.trim().strip_suffix('%')?.trim();
    number.parse::<f32>().ok().filter(|v| v.is_finite())
}
