//! State transitions: player moves, clock ticks, restart
//!
//! Every function appends the events the presentation layer needs to reflect,
//! in the order the changes happened.

use glam::Vec2;

use super::collision::{CollisionSummary, resolve_collisions};
use super::rect::{EntitySizes, Viewport};
use super::state::{EntityId, FoodState, GameEvent, GameState};
use crate::clamp_to_arena;

/// Move the player by `delta` (percent) and evaluate collisions.
///
/// Does nothing once the game is over.
pub fn move_player(
    state: &mut GameState,
    delta: Vec2,
    viewport: &Viewport,
    sizes: &EntitySizes,
    events: &mut Vec<GameEvent>,
) -> CollisionSummary {
    if !state.is_active() {
        return CollisionSummary::default();
    }

    state.player = clamp_to_arena(state.player + delta);
    events.push(GameEvent::PlayerMoved(state.player));

    resolve_collisions(state, viewport, sizes, events)
}

/// Advance the simulation clock and resolve deferred work that came due.
///
/// Food respawns keep running after game over, like the timers they model.
pub fn tick(state: &mut GameState, dt_ms: f64, events: &mut Vec<GameEvent>) {
    if !dt_ms.is_finite() || dt_ms <= 0.0 {
        return;
    }
    state.clock_ms += dt_ms;
    let now = state.clock_ms;

    for i in 0..state.foods.len() {
        let FoodState::Collected { respawn_at_ms } = state.foods[i].state else {
            continue;
        };
        if respawn_at_ms > now {
            continue;
        }
        let pos = state.random_spot();
        let food = &mut state.foods[i];
        food.pos = pos;
        food.state = FoodState::Available;
        events.push(GameEvent::Relocated {
            entity: EntityId::Food(i),
            pos,
        });
        events.push(GameEvent::VisibilityChanged {
            entity: EntityId::Food(i),
            visible: true,
        });
        log::debug!("Food {i} respawned at ({:.1}, {:.1})", pos.x, pos.y);
    }

    if state.cues.home_pulse_until.is_some_and(|t| t <= now) {
        state.cues.home_pulse_until = None;
        events.push(GameEvent::HomePulse(false));
    }
    if state.cues.hit_flash_until.is_some_and(|t| t <= now) {
        state.cues.hit_flash_until = None;
        events.push(GameEvent::HitFlash(false));
    }
}

/// Start a fresh run and emit a full refresh of everything on screen
pub fn restart(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let had_pulse = state.cues.home_pulse_until.is_some();
    let had_flash = state.cues.hit_flash_until.is_some();

    state.reset();

    events.push(GameEvent::Restarted);
    events.push(GameEvent::ScoreChanged(state.score));
    events.push(GameEvent::LivesChanged(state.lives));
    events.push(GameEvent::PlayerMoved(state.player));
    events.push(GameEvent::Relocated {
        entity: EntityId::Home,
        pos: state.home,
    });
    for (i, pos) in state.obstacles.iter().enumerate() {
        events.push(GameEvent::Relocated {
            entity: EntityId::Obstacle(i),
            pos: *pos,
        });
    }
    for i in 0..state.foods.len() {
        events.push(GameEvent::VisibilityChanged {
            entity: EntityId::Food(i),
            visible: true,
        });
    }
    if had_pulse {
        events.push(GameEvent::HomePulse(false));
    }
    if had_flash {
        events.push(GameEvent::HitFlash(false));
    }
    log::info!("Game restarted");
}
