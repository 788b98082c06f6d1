//! Frogshot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use frogshot::renderer::{CanvasRenderer, Hud, Sprites};
    use frogshot::sim::{GameEvent, GameState, tick};
    use frogshot::{InputLatch, Settings, WebError};

    const CANVAS_ID: &str = "gameCanvas";
    const SHOOTER_IMAGE: &str = "frog.png";
    const BACKGROUND_IMAGE: &str = "background.png";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputLatch,
        renderer: CanvasRenderer,
        hud: Hud,
    }

    impl Game {
        /// One frame: drain input, step the simulation, draw
        fn frame(&mut self) {
            let input = self.input.drain();
            tick(&mut self.state, &input);

            for event in self.state.drain_events() {
                log_event(&event);
            }

            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
            self.hud.update(&self.state);
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::LifeLost { lives_left } => log::info!("Life lost, {} left", lives_left),
            GameEvent::GameOver { score, level } => {
                log::info!("Final score {} (level {})", score, level)
            }
            other => log::debug!("{:?}", other),
        }
    }

    fn canvas_element(document: &Document) -> Result<HtmlCanvasElement, WebError> {
        document
            .get_element_by_id(CANVAS_ID)
            .ok_or(WebError::MissingElement { id: CANVAS_ID })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| WebError::WrongElementType {
                id: CANVAS_ID,
                expected: "canvas",
            })
    }

    pub async fn run() -> Result<(), WebError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Frogshot starting...");

        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let canvas = canvas_element(&document)?;

        // Difficulty is fixed for the lifetime of the page. `?mode=` only
        // affects this visit, so it is applied after saving.
        let stored = Settings::load();
        stored.save();
        let settings = match window.location().search() {
            Ok(query) => stored.with_query(&query),
            Err(_) => stored,
        };

        let playfield = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_playfield(seed, settings.difficulty, playfield);
        log::info!(
            "Game initialized with seed {} ({}, {}x{})",
            seed,
            settings.difficulty.as_str(),
            playfield.x,
            playfield.y
        );

        // Nothing is drawn until both images have settled
        let sprites = Sprites::load(SHOOTER_IMAGE, BACKGROUND_IMAGE).await;
        let renderer = CanvasRenderer::new(&canvas, sprites)?;
        let mut hud = Hud::new(&document);
        hud.show_menu();

        let game = Rc::new(RefCell::new(Game {
            state,
            input: InputLatch::new(),
            renderer,
            hud,
        }));

        setup_input_handlers(&canvas, &document, game.clone())?;
        setup_buttons(&document, game.clone())?;

        request_animation_frame(game);

        log::info!("Frogshot running!");
        Ok(())
    }

    /// Convert client coordinates to canvas pixels
    fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let scale_x = if rect.width() > 0.0 {
            canvas.width() as f64 / rect.width()
        } else {
            1.0
        };
        let scale_y = if rect.height() > 0.0 {
            canvas.height() as f64 / rect.height()
        } else {
            1.0
        };
        Vec2::new(
            ((event.client_x() as f64 - rect.left()) * scale_x) as f32,
            ((event.client_y() as f64 - rect.top()) * scale_y) as f32,
        )
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        document: &Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), WebError> {
        // Mouse move - aim
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_point(&canvas_clone, &event);
                game.borrow_mut().input.pointer_moved(pos);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click - fire
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.fire();
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard - Space starts or fires
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().input.action();
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), WebError> {
        for id in ["startButton", "restartButton"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::debug!("No #{} on the page", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.start();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Frogshot failed to start: {}", e);
        web_sys::console::error_1(&format!("Frogshot failed to start: {e}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Frogshot (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let mut settings = frogshot::Settings::load();
    if let Some(arg) = std::env::args().nth(1) {
        match frogshot::Difficulty::from_str(&arg) {
            Some(difficulty) => settings.difficulty = difficulty,
            None => log::warn!("Unknown difficulty '{}', using {}", arg, settings.difficulty.as_str()),
        }
    }

    demo::run(rand::random(), settings.difficulty, 20_000);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autoplay: aims at the first target whose color matches the
/// loaded shot (or the first target otherwise) and fires when idle.
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use frogshot::Difficulty;
    use frogshot::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    pub fn run(seed: u64, difficulty: Difficulty, max_frames: u32) {
        let mut state = GameState::new(seed, difficulty);
        log::info!("Demo seed {} ({})", seed, difficulty.as_str());

        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );

        for _ in 0..max_frames {
            let loaded = state.shooter.next_color;
            let aim = state
                .cluster
                .targets
                .iter()
                .find(|t| t.color == loaded)
                .or_else(|| state.cluster.targets.first())
                .map(|t| t.pos);

            let input = TickInput {
                pointer: aim,
                fire: state.shooter.projectile.is_none(),
                ..Default::default()
            };
            tick(&mut state, &input);

            for event in state.drain_events() {
                match event {
                    GameEvent::LevelCleared { new_level } => log::info!("Reached level {}", new_level),
                    GameEvent::LifeLost { lives_left } => log::info!("Life lost, {} left", lives_left),
                    other => log::debug!("{:?}", other),
                }
            }

            if state.phase == GamePhase::GameOver {
                break;
            }
        }

        println!("{}", state.status_line());
    }
}
