//! Cat Home entry point
//!
//! In the browser this wires DOM events to the game controller. Natively it
//! plays a short headless session against the logging presenter.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use cat_home::dom::DomPresenter;
    use cat_home::sim::GameState;
    use cat_home::{Direction, Game, Settings};

    type SharedGame = Rc<RefCell<Game<DomPresenter>>>;

    /// Longest frame gap fed to the clock (tab switches, breakpoints)
    const MAX_FRAME_MS: f64 = 250.0;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cat Home starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let presenter = match DomPresenter::bind(&document, &settings) {
            Ok(p) => p,
            Err(e) => {
                log::error!("Cannot start: {:?}", e);
                return;
            }
        };

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::with_food_layout(seed, &presenter.food_layout());
        let game: SharedGame = Rc::new(RefCell::new(Game::new(state, presenter, settings)));

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_direction_buttons(&document, game.clone());
        setup_restart_button(&document, game.clone());

        request_animation_frame(game, None);

        log::info!("Cat Home running!");
    }

    fn setup_keyboard(game: SharedGame) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            g.presenter().resume_audio();
            if g.on_key(&event.key()) {
                // Keep arrows from scrolling the page
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_direction_buttons(document: &web_sys::Document, game: SharedGame) {
        for dir in Direction::ALL {
            let Some(btn) = document.get_element_by_id(dir.control_id()) else {
                log::warn!("No #{} button", dir.control_id());
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.presenter().resume_audio();
                g.on_directional(dir);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &web_sys::Document, game: SharedGame) {
        let Some(btn) = document.get_element_by_id("restart") else {
            log::warn!("No #restart button");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().restart();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: SharedGame, last_time: Option<f64>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, last_time, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: SharedGame, last_time: Option<f64>, time: f64) {
        let dt = last_time.map_or(0.0, |last| (time - last).clamp(0.0, MAX_FRAME_MS));
        game.borrow_mut().frame(dt);
        request_animation_frame(game, Some(time));
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cat Home (native) starting...");
    log::info!("The browser build is the real game - run with `trunk serve` for the web version");

    let path = std::env::args().nth(1);
    let settings = cat_home::Settings::load_from(path.as_deref());
    headless::play(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cat_home::sim::{GameState, Viewport};
    use cat_home::{Direction, Game, LogPresenter, Settings};
    use glam::Vec2;

    /// Inputs fed to the autopilot before stopping
    const MAX_MOVES: u32 = 600;
    /// Simulated time between inputs (ms)
    const MOVE_INTERVAL_MS: f64 = 100.0;

    /// Step toward `target` along the axis with the larger gap
    fn steer(from: Vec2, target: Vec2) -> Direction {
        let d = target - from;
        if d.x.abs() >= d.y.abs() {
            if d.x >= 0.0 { Direction::Right } else { Direction::Left }
        } else if d.y >= 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Walk the cat home repeatedly until out of moves or out of lives
    pub fn play(settings: Settings) {
        let seed = settings.seed.unwrap_or(0x0CA7_0503);
        let food = [
            Some(Vec2::new(20.0, 30.0)),
            Some(Vec2::new(70.0, 25.0)),
            Some(Vec2::new(40.0, 80.0)),
        ];
        let state = GameState::with_food_layout(seed, &food);
        let mut game = Game::new(state, LogPresenter::new(Viewport::default()), settings);

        let mut visits = 0;
        let mut moves = 0;
        while moves < MAX_MOVES && game.state().is_active() {
            let dir = steer(game.state().player, game.state().home);
            if game.on_directional(dir).reached_home {
                visits += 1;
            }
            game.frame(MOVE_INTERVAL_MS);
            moves += 1;
        }

        let state = game.state();
        log::info!(
            "Session over after {moves} moves: {visits} visits home, score {}, lives {}",
            state.score,
            state.lives
        );
        println!(
            "score={} lives={} visits={} moves={}",
            state.score, state.lives, visits, moves
        );
    }
}
