//! Presentation adapter
//!
//! Everything the player sees or hears goes through this trait. The
//! simulation never calls it directly; `Game` replays simulation events onto it.

use glam::Vec2;

pub use crate::sim::{EntityId, Tone, Waveform};
use crate::sim::Viewport;

pub trait Presenter {
    /// Current pixel size of the play area
    fn viewport(&self) -> Viewport;

    fn render_player(&mut self, pos: Vec2);
    fn render_score(&mut self, score: u64);
    fn render_lives(&mut self, lives: u8);

    /// Play a feedback tone. Implementations without audio skip silently.
    fn play_tone(&mut self, tone: Tone);

    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);

    fn relocate(&mut self, entity: EntityId, pos: Vec2);
    fn set_visible(&mut self, entity: EntityId, visible: bool);

    fn set_home_pulse(&mut self, _on: bool) {}
    fn set_hit_flash(&mut self, _on: bool) {}
    /// Idle bob of the home marker (pixels)
    fn float_home(&mut self, _offset_px: f32) {}
}

/// Headless presenter that writes every call to the log
#[derive(Debug, Clone)]
pub struct LogPresenter {
    viewport: Viewport,
}

impl LogPresenter {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Presenter for LogPresenter {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render_player(&mut self, pos: Vec2) {
        log::debug!("cat -> ({:.0}%, {:.0}%)", pos.x, pos.y);
    }

    fn render_score(&mut self, score: u64) {
        log::info!("score: {score}");
    }

    fn render_lives(&mut self, lives: u8) {
        log::info!("lives: {lives}");
    }

    fn play_tone(&mut self, tone: Tone) {
        let (freq, duration, waveform) = tone.params();
        log::debug!("tone {tone:?}: {freq} Hz for {duration}s ({waveform:?})");
    }

    fn show_game_over(&mut self, final_score: u64) {
        log::info!("GAME OVER - final score {final_score}");
    }

    fn hide_game_over(&mut self) {
        log::debug!("game over overlay hidden");
    }

    fn relocate(&mut self, entity: EntityId, pos: Vec2) {
        log::debug!("{entity:?} -> ({:.1}%, {:.1}%)", pos.x, pos.y);
    }

    fn set_visible(&mut self, entity: EntityId, visible: bool) {
        log::debug!("{entity:?} visible: {visible}");
    }
}
