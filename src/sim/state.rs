//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Moves and collisions are processed
    Active,
    /// Lives ran out; only restart does anything
    GameOver,
}

/// Addresses one entity of the world for presentation calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Player,
    Home,
    Food(usize),
    Obstacle(usize),
}

/// Oscillator shape for feedback tones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Sine
    Smooth,
    /// Square
    Harsh,
}

/// Feedback tones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Reached home
    Success,
    /// Ate food
    Reward,
    /// Hit an obstacle
    Injury,
    /// Out of lives
    GameOver,
}

impl Tone {
    /// (frequency Hz, duration s, waveform)
    pub fn params(self) -> (f32, f32, Waveform) {
        match self {
            Tone::Success => (523.25, 0.3, Waveform::Smooth), // C5
            Tone::Reward => (659.25, 0.15, Waveform::Smooth), // E5
            Tone::Injury => (220.0, 0.5, Waveform::Harsh),
            Tone::GameOver => (220.0, 1.0, Waveform::Harsh),
        }
    }
}

/// Something the presentation layer has to reflect, in emission order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PlayerMoved(Vec2),
    ScoreChanged(u64),
    LivesChanged(u8),
    Tone(Tone),
    Relocated { entity: EntityId, pos: Vec2 },
    VisibilityChanged { entity: EntityId, visible: bool },
    HomePulse(bool),
    HitFlash(bool),
    GameOver { final_score: u64 },
    Restarted,
}

/// Collect/respawn cycle of a food item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodState {
    Available,
    /// Hidden until the simulation clock reaches `respawn_at_ms`
    Collected { respawn_at_ms: f64 },
}

/// A food item
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub pos: Vec2,
    pub state: FoodState,
}

impl Food {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            state: FoodState::Available,
        }
    }

    pub fn is_collected(&self) -> bool {
        matches!(self.state, FoodState::Collected { .. })
    }
}

/// Deadlines of transient visual cues
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cues {
    pub home_pulse_until: Option<f64>,
    pub hit_flash_until: Option<f64>,
}

/// RNG seed bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub rng_state: RngState,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player position (percent, top-left of the sprite)
    pub player: Vec2,
    /// Home target position
    pub home: Vec2,
    /// Obstacles (always `OBSTACLE_STARTS.len()` of them, in display order)
    pub obstacles: Vec<Vec2>,
    /// Food items (count fixed at construction, in display order)
    pub foods: Vec<Food>,
    /// Transient visual cues
    pub cues: Cues,
    /// Simulation clock (ms), advanced only by `tick`
    pub clock_ms: f64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given seed and initial food layout
    pub fn new(seed: u64, food_starts: &[Vec2]) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            rng: rng_state.to_rng(),
            rng_state,
            lives: START_LIVES,
            score: 0,
            phase: GamePhase::Active,
            player: PLAYER_START,
            home: HOME_START,
            obstacles: OBSTACLE_STARTS.to_vec(),
            foods: food_starts.iter().copied().map(Food::new).collect(),
            cues: Cues::default(),
            clock_ms: 0.0,
        }
    }

    /// Create a new game from a partial food layout: `None` slots get a seeded random spot
    pub fn with_food_layout(seed: u64, layout: &[Option<Vec2>]) -> Self {
        let mut state = Self::new(seed, &[]);
        let foods: Vec<Food> = layout
            .iter()
            .map(|slot| Food::new(slot.unwrap_or_else(|| state.random_spot())))
            .collect();
        state.foods = foods;
        state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Draw a relocation target in [0, RELOCATE_MAX) on each axis
    pub fn random_spot(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..RELOCATE_MAX),
            self.rng.random_range(0.0..RELOCATE_MAX),
        )
    }

    /// Put everything back to its starting layout.
    ///
    /// Food keeps its current position but becomes available again, which also
    /// drops any pending respawn. The RNG and clock keep running.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.phase = GamePhase::Active;
        self.player = PLAYER_START;
        self.home = HOME_START;
        self.obstacles = OBSTACLE_STARTS.to_vec();
        for food in &mut self.foods {
            food.state = FoodState::Available;
        }
        self.cues = Cues::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(1, &[Vec2::new(10.0, 10.0), Vec2::new(40.0, 70.0)]);
        assert_eq!(state.player, Vec2::new(50.0, 50.0));
        assert_eq!(state.home, HOME_START);
        assert_eq!(state.obstacles.len(), 4);
        assert_eq!(state.foods.len(), 2);
        assert_eq!(state.lives, 3);
        assert!(state.is_active());
    }

    #[test]
    fn test_random_spot_in_range() {
        let mut state = GameState::new(42, &[]);
        for _ in 0..1000 {
            let p = state.random_spot();
            assert!((0.0..RELOCATE_MAX).contains(&p.x));
            assert!((0.0..RELOCATE_MAX).contains(&p.y));
        }
    }

    #[test]
    fn test_food_layout_fills_gaps_from_seed() {
        let layout = [Some(Vec2::new(10.0, 20.0)), None, None];
        let a = GameState::with_food_layout(9, &layout);
        let b = GameState::with_food_layout(9, &layout);
        assert_eq!(a.foods, b.foods);
        assert_eq!(a.foods.len(), 3);
        assert_eq!(a.foods[0].pos, Vec2::new(10.0, 20.0));
        assert!(a.foods[1].pos.x < RELOCATE_MAX);
    }

    #[test]
    fn test_tone_params_are_distinct() {
        let tones = [Tone::Success, Tone::Reward, Tone::Injury, Tone::GameOver];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a.params(), b.params());
            }
        }
        assert_eq!(Tone::Injury.params().2, Waveform::Harsh);
        assert!(Tone::Injury.params().1 > Tone::Reward.params().1);
    }
}
