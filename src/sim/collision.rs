//! Collision evaluation
//!
//! Runs after every move. The three checks (home, food, obstacles) are
//! independent: a single pass can score a home visit and lose a life.

use super::rect::{EntitySizes, Rect, Viewport};
use super::state::{EntityId, FoodState, GameEvent, GamePhase, GameState, Tone};
use crate::consts::*;

/// Outcome of one collision pass, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionSummary {
    pub reached_home: bool,
    pub food_eaten: u32,
    pub obstacles_hit: u32,
}

/// Pixel box of an entity at its current position.
///
/// Display-only transforms (the home float and pulse) are not part of the box.
pub fn entity_rect(
    state: &GameState,
    entity: EntityId,
    viewport: &Viewport,
    sizes: &EntitySizes,
) -> Rect {
    let pos = match entity {
        EntityId::Player => state.player,
        EntityId::Home => state.home,
        EntityId::Food(i) => state.foods[i].pos,
        EntityId::Obstacle(i) => state.obstacles[i],
    };
    Rect::from_percent(pos, sizes.of(entity), viewport)
}

/// Evaluate player overlaps against home, food and obstacles, in that order
pub fn resolve_collisions(
    state: &mut GameState,
    viewport: &Viewport,
    sizes: &EntitySizes,
    events: &mut Vec<GameEvent>,
) -> CollisionSummary {
    let mut summary = CollisionSummary::default();
    if !state.is_active() {
        return summary;
    }

    let player = entity_rect(state, EntityId::Player, viewport, sizes);
    // Obstacles touched at the moment of the move, before a home visit reshuffles them
    let touched: Vec<usize> = (0..state.obstacles.len())
        .filter(|&i| player.overlaps(&entity_rect(state, EntityId::Obstacle(i), viewport, sizes)))
        .collect();

    // Home: score, move home, reshuffle obstacles
    if player.overlaps(&entity_rect(state, EntityId::Home, viewport, sizes)) {
        summary.reached_home = true;
        state.score += HOME_SCORE;
        events.push(GameEvent::ScoreChanged(state.score));
        events.push(GameEvent::Tone(Tone::Success));

        state.home = state.random_spot();
        events.push(GameEvent::Relocated {
            entity: EntityId::Home,
            pos: state.home,
        });
        for i in 0..state.obstacles.len() {
            state.obstacles[i] = state.random_spot();
            events.push(GameEvent::Relocated {
                entity: EntityId::Obstacle(i),
                pos: state.obstacles[i],
            });
        }

        state.cues.home_pulse_until = Some(state.clock_ms + HOME_PULSE_MS);
        events.push(GameEvent::HomePulse(true));
        log::debug!("Reached home, score {}", state.score);
    }

    // Food: only uncollected items count
    for i in 0..state.foods.len() {
        if state.foods[i].is_collected() {
            continue;
        }
        if !player.overlaps(&entity_rect(state, EntityId::Food(i), viewport, sizes)) {
            continue;
        }
        summary.food_eaten += 1;
        state.score += FOOD_SCORE;
        events.push(GameEvent::ScoreChanged(state.score));
        events.push(GameEvent::Tone(Tone::Reward));

        state.foods[i].state = FoodState::Collected {
            respawn_at_ms: state.clock_ms + FOOD_RESPAWN_MS,
        };
        events.push(GameEvent::VisibilityChanged {
            entity: EntityId::Food(i),
            visible: false,
        });
        log::debug!("Ate food {i}, score {}", state.score);
    }

    // Obstacles: one life per obstacle touched
    for i in touched {
        summary.obstacles_hit += 1;
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LivesChanged(state.lives));
        events.push(GameEvent::Tone(Tone::Injury));
        log::debug!("Hit obstacle {i}, lives {}", state.lives);

        if state.lives == 0 {
            end_game(state, events);
            break;
        }

        state.cues.hit_flash_until = Some(state.clock_ms + HIT_FLASH_MS);
        events.push(GameEvent::HitFlash(true));
    }

    summary
}

/// Active -> GameOver
fn end_game(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::Tone(Tone::GameOver));
    events.push(GameEvent::GameOver {
        final_score: state.score,
    });
    log::info!("Game over, final score {}", state.score);
}
