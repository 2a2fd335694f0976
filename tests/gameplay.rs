// Gameplay tests (native) for the `cat-home` crate.
// They drive `Game` through its input entry points with a presenter that
// records every call, so no browser is needed.

use cat_home::consts::*;
use cat_home::sim::{FoodState, GamePhase, GameState, Viewport};
use cat_home::{Direction, EntityId, Game, Presenter, Settings, Tone};
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Player(Vec2),
    Score(u64),
    Lives(u8),
    Tone(Tone),
    ShowGameOver(u64),
    HideGameOver,
    Relocate(EntityId, Vec2),
    Visible(EntityId, bool),
    HomePulse(bool),
    HitFlash(bool),
    Float,
}

struct RecordingPresenter {
    viewport: Viewport,
    calls: Vec<Call>,
}

impl RecordingPresenter {
    fn new() -> Self {
        Self {
            viewport: Viewport::new(500.0, 500.0),
            calls: Vec::new(),
        }
    }
}

impl Presenter for RecordingPresenter {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
    fn render_player(&mut self, pos: Vec2) {
        self.calls.push(Call::Player(pos));
    }
    fn render_score(&mut self, score: u64) {
        self.calls.push(Call::Score(score));
    }
    fn render_lives(&mut self, lives: u8) {
        self.calls.push(Call::Lives(lives));
    }
    fn play_tone(&mut self, tone: Tone) {
        self.calls.push(Call::Tone(tone));
    }
    fn show_game_over(&mut self, final_score: u64) {
        self.calls.push(Call::ShowGameOver(final_score));
    }
    fn hide_game_over(&mut self) {
        self.calls.push(Call::HideGameOver);
    }
    fn relocate(&mut self, entity: EntityId, pos: Vec2) {
        self.calls.push(Call::Relocate(entity, pos));
    }
    fn set_visible(&mut self, entity: EntityId, visible: bool) {
        self.calls.push(Call::Visible(entity, visible));
    }
    fn set_home_pulse(&mut self, on: bool) {
        self.calls.push(Call::HomePulse(on));
    }
    fn set_hit_flash(&mut self, on: bool) {
        self.calls.push(Call::HitFlash(on));
    }
    fn float_home(&mut self, _offset_px: f32) {
        self.calls.push(Call::Float);
    }
}

/// Home, obstacles and food all parked away from the cat's start
fn quiet_state(food: &[Vec2]) -> GameState {
    let mut state = GameState::new(2024, food);
    state.home = Vec2::new(90.0, 0.0);
    state.obstacles = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 90.0),
        Vec2::new(90.0, 90.0),
        Vec2::new(0.0, 10.0),
    ];
    state
}

fn game_with(state: GameState, settings: Settings) -> Game<RecordingPresenter> {
    let mut game = Game::new(state, RecordingPresenter::new(), settings);
    game.presenter_mut().calls.clear();
    game
}

fn quiet_game() -> Game<RecordingPresenter> {
    game_with(quiet_state(&[]), Settings::default())
}

#[test]
fn new_game_draws_everything_once() {
    let game = Game::new(
        GameState::new(1, &[Vec2::new(10.0, 10.0)]),
        RecordingPresenter::new(),
        Settings::default(),
    );
    let calls = &game.presenter().calls;
    assert!(calls.contains(&Call::Score(0)));
    assert!(calls.contains(&Call::Lives(START_LIVES)));
    assert!(calls.contains(&Call::Player(PLAYER_START)));
    assert!(calls.contains(&Call::Relocate(EntityId::Home, HOME_START)));
    assert!(calls.contains(&Call::Visible(EntityId::Food(0), true)));
    assert!(calls.contains(&Call::HideGameOver));
}

#[test]
fn thirty_steps_right_clamp_at_the_edge() {
    let mut game = quiet_game();
    for _ in 0..30 {
        game.on_directional(Direction::Right);
    }
    assert_eq!(game.state().player, Vec2::new(100.0, 50.0));
    assert_eq!(game.presenter().calls.last(), Some(&Call::Player(Vec2::new(100.0, 50.0))));
}

#[test]
fn keyboard_and_buttons_move_the_same_way() {
    let mut by_key = quiet_game();
    let mut by_button = quiet_game();
    for (key, id) in [("ArrowUp", "up"), ("ArrowLeft", "left"), ("ArrowDown", "down")] {
        assert!(by_key.on_key(key));
        assert!(by_button.on_control(id));
    }
    assert_eq!(by_key.state().player, by_button.state().player);
    assert_eq!(by_key.state().player, Vec2::new(48.0, 50.0));
    assert!(!by_key.on_key("Enter"));
}

#[test]
fn three_obstacle_hits_end_the_game() {
    let mut state = quiet_state(&[]);
    state.obstacles[0] = Vec2::new(56.0, 50.0);
    let mut game = game_with(state, Settings::default());

    game.on_directional(Direction::Right);
    assert_eq!(game.state().lives, 2);
    assert!(game.state().is_active());
    game.on_directional(Direction::Right);
    assert_eq!(game.state().lives, 1);
    assert!(game.state().is_active());
    game.on_directional(Direction::Right);
    assert_eq!(game.state().lives, 0);
    assert_eq!(game.state().phase, GamePhase::GameOver);

    let calls = &game.presenter().calls;
    assert_eq!(calls.iter().filter(|c| **c == Call::Tone(Tone::Injury)).count(), 3);
    assert!(calls.contains(&Call::Tone(Tone::GameOver)));
    assert_eq!(calls.last(), Some(&Call::ShowGameOver(0)));
}

#[test]
fn moves_after_game_over_change_nothing() {
    let mut state = quiet_state(&[Vec2::new(46.0, 50.0)]);
    state.lives = 0;
    state.phase = GamePhase::GameOver;
    let mut game = game_with(state, Settings::default());

    for dir in Direction::ALL {
        game.on_directional(dir);
    }
    game.on_directional(Direction::Left);
    assert_eq!(game.state().player, PLAYER_START);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().lives, 0);
    assert!(game.presenter().calls.is_empty());
}

#[test]
fn reaching_home_scores_and_moves_it() {
    let mut state = quiet_state(&[]);
    state.home = Vec2::new(54.0, 50.0);
    let mut game = game_with(state, Settings::default());

    let summary = game.on_directional(Direction::Right);
    assert!(summary.reached_home);
    assert_eq!(game.state().score, HOME_SCORE);
    let home = game.state().home;
    assert!((0.0..RELOCATE_MAX).contains(&home.x));
    assert!((0.0..RELOCATE_MAX).contains(&home.y));
    for obstacle in &game.state().obstacles {
        assert!(obstacle.x < RELOCATE_MAX && obstacle.y < RELOCATE_MAX);
    }

    let calls = &game.presenter().calls;
    // Position is drawn before any collision feedback
    assert_eq!(calls[0], Call::Player(Vec2::new(52.0, 50.0)));
    assert_eq!(calls[1], Call::Score(HOME_SCORE));
    assert_eq!(calls[2], Call::Tone(Tone::Success));
    assert!(calls.contains(&Call::HomePulse(true)));
}

#[test]
fn home_visit_and_obstacle_hit_both_apply() {
    let mut state = quiet_state(&[]);
    state.home = Vec2::new(54.0, 50.0);
    state.obstacles[0] = Vec2::new(54.0, 52.0);
    let mut game = game_with(state, Settings::default());

    let summary = game.on_directional(Direction::Right);
    assert!(summary.reached_home);
    assert_eq!(summary.obstacles_hit, 1);
    assert_eq!(game.state().score, HOME_SCORE);
    assert_eq!(game.state().lives, START_LIVES - 1);

    let calls = &game.presenter().calls;
    assert!(calls.contains(&Call::Tone(Tone::Success)));
    assert!(calls.contains(&Call::Lives(START_LIVES - 1)));
    assert!(calls.contains(&Call::Tone(Tone::Injury)));
}

#[test]
fn food_scores_once_per_cycle_and_respawns() {
    let mut game = game_with(quiet_state(&[Vec2::new(52.0, 50.0)]), Settings::default());

    game.on_directional(Direction::Right);
    assert_eq!(game.state().score, FOOD_SCORE);
    assert!(game.presenter().calls.contains(&Call::Visible(EntityId::Food(0), false)));

    // Still overlapping the hidden food
    game.on_directional(Direction::Left);
    game.on_directional(Direction::Right);
    assert_eq!(game.state().score, FOOD_SCORE);

    game.frame(FOOD_RESPAWN_MS);
    assert_eq!(game.state().foods[0].state, FoodState::Available);
    assert!(game.presenter().calls.contains(&Call::Visible(EntityId::Food(0), true)));
}

#[test]
fn restart_resets_from_game_over() {
    let mut state = quiet_state(&[Vec2::new(52.0, 50.0)]);
    state.obstacles[0] = Vec2::new(56.0, 56.0);
    state.lives = 1;
    let mut game = game_with(state, Settings::default());

    game.on_directional(Direction::Right);
    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert_eq!(game.state().score, FOOD_SCORE);
    assert!(game.state().foods[0].is_collected());

    game.presenter_mut().calls.clear();
    game.restart();

    let state = game.state();
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, START_LIVES);
    assert_eq!(state.player, PLAYER_START);
    assert_eq!(state.home, HOME_START);
    assert_eq!(state.obstacles, OBSTACLE_STARTS.to_vec());
    assert!(state.is_active());
    assert!(state.foods.iter().all(|f| !f.is_collected()));
    assert_eq!(game.presenter().calls[0], Call::HideGameOver);

    // The respawn that was pending before restart never fires
    let pos = game.state().foods[0].pos;
    game.frame(FOOD_RESPAWN_MS * 2.0);
    assert_eq!(game.state().foods[0].pos, pos);
}

#[test]
fn reduced_motion_hides_cues() {
    let mut state = quiet_state(&[]);
    state.home = Vec2::new(54.0, 50.0);
    let settings = Settings {
        reduced_motion: true,
        ..Default::default()
    };
    let mut game = game_with(state, settings);
    game.on_directional(Direction::Right);
    game.frame(HOME_PULSE_MS);

    let calls = &game.presenter().calls;
    assert!(!calls.iter().any(|c| matches!(c, Call::HomePulse(_) | Call::Float)));
}

#[test]
fn home_pulse_ends_and_home_floats() {
    let mut state = quiet_state(&[]);
    state.home = Vec2::new(54.0, 50.0);
    let mut game = game_with(state, Settings::default());
    game.on_directional(Direction::Right);
    game.frame(HOME_PULSE_MS);

    let calls = &game.presenter().calls;
    assert!(calls.contains(&Call::HomePulse(false)));
    assert_eq!(calls.last(), Some(&Call::Float));
}

#[test]
fn smaller_viewport_brings_boxes_together() {
    let mut state = quiet_state(&[Vec2::new(62.0, 50.0)]);
    state.obstacles = vec![Vec2::new(0.0, 95.0); 4];
    let mut game = game_with(state, Settings::default());

    // 10% apart is 50px on a 500px area: no overlap with a 40px cat
    game.on_directional(Direction::Up);
    game.on_directional(Direction::Down);
    assert_eq!(game.state().score, 0);

    game.presenter_mut().viewport = Viewport::new(200.0, 500.0);
    game.on_directional(Direction::Down);
    assert_eq!(game.state().score, FOOD_SCORE);
}

#[test]
fn same_seed_same_run() {
    let script = [Direction::Right, Direction::Up, Direction::Up, Direction::Right];
    let run = || {
        let mut state = GameState::with_food_layout(77, &[None, None, None]);
        state.home = PLAYER_START;
        let mut game = game_with(state, Settings::default());
        for _ in 0..20 {
            for dir in script {
                game.on_directional(dir);
            }
            game.frame(500.0);
        }
        let s = game.state();
        (s.player, s.home, s.score, s.lives, s.obstacles.clone())
    };
    assert_eq!(run(), run());
}

proptest! {
    #[test]
    fn player_stays_in_arena(moves in proptest::collection::vec(0usize..4, 0..300)) {
        // Nothing to collide with, so every move reaches the clamp
        let mut state = GameState::new(5, &[]);
        state.home = Vec2::splat(1000.0);
        state.obstacles = vec![Vec2::splat(1000.0); OBSTACLE_STARTS.len()];
        let mut game = game_with(state, Settings::default());
        for m in moves {
            game.on_directional(Direction::ALL[m]);
            let p = game.state().player;
            prop_assert!((POSITION_MIN..=POSITION_MAX).contains(&p.x));
            prop_assert!((POSITION_MIN..=POSITION_MAX).contains(&p.y));
        }
        prop_assert!(game.state().is_active());
        prop_assert_eq!(game.state().lives, START_LIVES);
    }

    #[test]
    fn relocations_stay_below_eighty(seed in any::<u64>()) {
        let mut state = GameState::new(seed, &[]);
        state.home = PLAYER_START;
        let mut game = game_with(state, Settings::default());
        game.on_directional(Direction::Right);
        let home = game.state().home;
        prop_assert!(home.x >= 0.0 && home.x < RELOCATE_MAX);
        prop_assert!(home.y >= 0.0 && home.y < RELOCATE_MAX);
    }
}
