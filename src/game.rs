//! Game controller
//!
//! Owns the simulation state and a presenter. Input handlers, the restart
//! button and the frame loop all go through here, so a move is clamped,
//! rendered and collision-checked before the next event is looked at.

use glam::Vec2;

use crate::input::Direction;
use crate::presenter::Presenter;
use crate::settings::Settings;
use crate::sim::{self, CollisionSummary, EntityId, GameEvent, GameState};
use crate::home_float_offset;

pub struct Game<P: Presenter> {
    state: GameState,
    presenter: P,
    settings: Settings,
    /// Scratch buffer reused between events
    events: Vec<GameEvent>,
}

impl<P: Presenter> Game<P> {
    /// Create a game around an existing state and draw it once
    pub fn new(state: GameState, presenter: P, settings: Settings) -> Self {
        let mut game = Self {
            state,
            presenter,
            settings,
            events: Vec::new(),
        };
        game.sync();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Keyboard entry point. Returns true if the key was a direction.
    pub fn on_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.on_directional(dir);
                true
            }
            None => false,
        }
    }

    /// On-screen button entry point. Returns true if the id was a direction.
    pub fn on_control(&mut self, id: &str) -> bool {
        match Direction::from_control_id(id) {
            Some(dir) => {
                self.on_directional(dir);
                true
            }
            None => false,
        }
    }

    /// One step in `dir`. Ignored while the game is over.
    pub fn on_directional(&mut self, dir: Direction) -> CollisionSummary {
        self.move_by(dir.delta())
    }

    pub fn move_by(&mut self, delta: Vec2) -> CollisionSummary {
        if !self.state.is_active() {
            return CollisionSummary::default();
        }
        let viewport = self.presenter.viewport();
        let summary = sim::move_player(
            &mut self.state,
            delta,
            &viewport,
            &self.settings.sizes,
            &mut self.events,
        );
        self.dispatch();
        summary
    }

    pub fn restart(&mut self) {
        sim::restart(&mut self.state, &mut self.events);
        self.dispatch();
    }

    /// Per-frame update: advance the clock and keep the home bobbing
    pub fn frame(&mut self, dt_ms: f64) {
        sim::tick(&mut self.state, dt_ms, &mut self.events);
        self.dispatch();

        if self.state.is_active() && self.settings.effective_cues() {
            self.presenter
                .float_home(home_float_offset(self.state.clock_ms));
        }
    }

    /// Push the whole current state to the presenter
    pub fn sync(&mut self) {
        let state = &self.state;
        let p = &mut self.presenter;
        p.render_score(state.score);
        p.render_lives(state.lives);
        p.render_player(state.player);
        p.relocate(EntityId::Home, state.home);
        for (i, pos) in state.obstacles.iter().enumerate() {
            p.relocate(EntityId::Obstacle(i), *pos);
        }
        for (i, food) in state.foods.iter().enumerate() {
            p.relocate(EntityId::Food(i), food.pos);
            p.set_visible(EntityId::Food(i), !food.is_collected());
        }
        if state.is_active() {
            p.hide_game_over();
        } else {
            p.show_game_over(state.score);
        }
    }

    /// Replay queued simulation events onto the presenter, in order
    fn dispatch(&mut self) {
        let cues = self.settings.effective_cues();
        for event in self.events.drain(..) {
            let p = &mut self.presenter;
            match event {
                GameEvent::PlayerMoved(pos) => p.render_player(pos),
                GameEvent::ScoreChanged(score) => p.render_score(score),
                GameEvent::LivesChanged(lives) => p.render_lives(lives),
                GameEvent::Tone(tone) => p.play_tone(tone),
                GameEvent::Relocated { entity, pos } => p.relocate(entity, pos),
                GameEvent::VisibilityChanged { entity, visible } => p.set_visible(entity, visible),
                GameEvent::HomePulse(on) if cues => p.set_home_pulse(on),
                GameEvent::HitFlash(on) if cues => p.set_hit_flash(on),
                GameEvent::HomePulse(_) | GameEvent::HitFlash(_) => {}
                GameEvent::GameOver { final_score } => p.show_game_over(final_score),
                GameEvent::Restarted => p.hide_game_over(),
            }
        }
    }
}
