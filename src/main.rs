//! Pocket Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};

    use pocket_snake::input::{Command, command_for_key};
    use pocket_snake::persistence::{KeyValueStore, LocalStorage, MemoryStore};
    use pocket_snake::platform::{TickTimer, TimerCommand};
    use pocket_snake::sim::Direction;
    use pocket_snake::{Settings, SnakeGame};

    type Store = Box<dyn KeyValueStore>;

    /// Game instance holding all state
    struct App {
        game: SnakeGame<Store>,
        timer: TickTimer,
        /// setInterval handle of the armed tick timer
        interval: Option<i32>,
        /// Shared tick callback, re-armed with a new period on speed changes
        on_tick: Option<js_sys::Function>,
        /// Last snapshot pushed to the DOM
        last_state: String,
    }

    impl App {
        fn new(seed: u64) -> Self {
            let store: Store = match LocalStorage::open() {
                Ok(storage) => Box::new(storage),
                Err(e) => {
                    log::warn!("{}; high score will not persist", e);
                    Box::new(MemoryStore::new())
                }
            };
            Self {
                game: SnakeGame::new(Settings::default(), store, seed),
                timer: TickTimer::new(),
                interval: None,
                on_tick: None,
                last_state: String::new(),
            }
        }

        /// Re-arm or tear down the tick timer to match the game
        fn sync_timer(&mut self) {
            let state = self.game.state();
            let command = self.timer.sync(state.is_playing(), state.speed_ms);
            let window = web_sys::window().unwrap();

            match command {
                TimerCommand::Keep => {}
                TimerCommand::Disarm => {
                    if let Some(handle) = self.interval.take() {
                        window.clear_interval_with_handle(handle);
                    }
                    log::debug!("Tick timer stopped");
                }
                TimerCommand::Arm(period) => {
                    if let Some(handle) = self.interval.take() {
                        window.clear_interval_with_handle(handle);
                    }
                    if let Some(ref callback) = self.on_tick {
                        match window
                            .set_interval_with_callback_and_timeout_and_arguments_0(
                                callback,
                                period as i32,
                            ) {
                            Ok(handle) => self.interval = Some(handle),
                            Err(e) => log::error!("Failed to arm tick timer: {:?}", e),
                        }
                    }
                    log::debug!("Tick timer armed at {}ms", period);
                }
            }
        }

        fn command(&mut self, command: Command) {
            self.game.apply(command);
            self.sync_timer();
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let snapshot = self.game.snapshot();
            let json = match serde_json::to_string(&snapshot) {
                Ok(json) => json,
                Err(e) => {
                    log::warn!("Snapshot serialization failed: {}", e);
                    return;
                }
            };
            if json == self.last_state {
                return;
            }

            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Renderer reads the snapshot from here each frame
            if let Some(el) = document.get_element_by_id("game-screen") {
                let _ = el.set_attribute("data-state", &json);
            }

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("{:04}", snapshot.score)));
            }
            if let Some(el) = document.get_element_by_id("hud-high") {
                el.set_text_content(Some(&format!("{:04}", snapshot.high_score)));
            }

            // Overlay: instructions while idle, final score after game over
            if let Some(el) = document.get_element_by_id("overlay") {
                let _ = el.class_list().toggle_with_force("hidden", snapshot.is_playing);
            }
            if let Some(el) = document.get_element_by_id("instructions") {
                let _ = el.class_list().toggle_with_force("hidden", snapshot.game_over);
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.class_list().toggle_with_force("hidden", !snapshot.game_over);
            }
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&snapshot.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("start-btn") {
                let label = if snapshot.game_over {
                    "PLAY AGAIN"
                } else {
                    "START GAME"
                };
                el.set_text_content(Some(label));
            }

            self.last_state = json;
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pocket Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_tick_callback(app.clone());
        setup_keyboard(app.clone());
        setup_touch_controls(app.clone());
        setup_start_button(app.clone());

        request_animation_frame(app);

        log::info!("Pocket Snake running!");
    }

    /// One callback for the lifetime of the page; only its period changes
    fn setup_tick_callback(app: Rc<RefCell<App>>) {
        let weak = Rc::downgrade(&app);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(app) = weak.upgrade() {
                let mut a = app.borrow_mut();
                a.game.tick();
                a.sync_timer();
            }
        });
        app.borrow_mut().on_tick = Some(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());
        closure.forget();
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            let mut a = app.borrow_mut();
            if let Some(command) = command_for_key(&key) {
                // Keep arrows/space from scrolling the page
                event.prevent_default();
                a.command(command);
            } else if key == "i" || key == "I" {
                let enabled = !a.game.autopilot();
                a.game.set_autopilot(enabled);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch_controls(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let buttons = [
            ("btn-up", Direction::Up),
            ("btn-down", Direction::Down),
            ("btn-left", Direction::Left),
            ("btn-right", Direction::Right),
        ];

        for (id, direction) in buttons {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    app.borrow_mut().command(Command::Turn(direction));
                });
                let _ = btn
                    .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_start_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().command(Command::Confirm);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            app.borrow_mut().update_hud();
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
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
    log::info!("Pocket Snake (native) starting...");
    log::info!("Native mode plays a headless demo - run with `trunk serve` for the web version");

    native_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use std::time::Duration;

    use pocket_snake::persistence::MemoryStore;
    use pocket_snake::platform::{TickTimer, TimerCommand};
    use pocket_snake::sim::{GameEvent, Position, Snapshot};
    use pocket_snake::{Settings, SnakeGame};

    /// Demo stops here even if the autopilot is still alive
    const MAX_DEMO_TICKS: u64 = 3000;

    pub fn run() {
        let seed: u64 = rand::random();
        let mut game = SnakeGame::new(Settings::default(), MemoryStore::new(), seed);
        let mut timer = TickTimer::new();
        let mut period = Duration::ZERO;

        log::info!("Demo seed: {}", seed);
        game.set_autopilot(true);
        game.start();

        while game.state().is_playing() && game.state().time_ticks < MAX_DEMO_TICKS {
            match timer.sync(game.state().is_playing(), game.state().speed_ms) {
                TimerCommand::Arm(ms) => period = Duration::from_millis(ms as u64),
                TimerCommand::Disarm => break,
                TimerCommand::Keep => {}
            }
            std::thread::sleep(period);

            for event in game.tick() {
                if let GameEvent::GameOver { reason } = event {
                    log::info!("Demo ended: {:?}", reason);
                }
            }
            print!("\x1b[2J\x1b[H{}", render_ascii(&game.snapshot()));
        }

        println!(
            "\nFinal score: {}  High score: {}",
            game.snapshot().score,
            game.high_score()
        );
    }

    /// Text frame of the board, head `@`, body `o`, food `*`
    fn render_ascii(snapshot: &Snapshot) -> String {
        let size = snapshot.grid_size;
        let mut out = format!(
            "SCORE {:04}  HIGH {:04}  SPEED {}ms\n",
            snapshot.score, snapshot.high_score, snapshot.speed_ms
        );
        out.push('+');
        out.push_str(&"-".repeat(size as usize));
        out.push_str("+\n");
        for y in 0..size {
            out.push('|');
            for x in 0..size {
                let pos = Position::new(x, y);
                let cell = if snapshot.snake.first() == Some(&pos) {
                    '@'
                } else if snapshot.snake.contains(&pos) {
                    'o'
                } else if snapshot.food == Some(pos) {
                    '*'
                } else {
                    ' '
                };
                out.push(cell);
            }
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&"-".repeat(size as usize));
        out.push_str("+\n");
        out
    }
}
