//! Scroll Hop entry point
//!
//! Web: sets up the canvas and key listeners and drives `Game::frame` from
//! requestAnimationFrame. Native: runs a headless demo game with the
//! autopilot and a simulated 60 Hz clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use scroll_hop::render::CanvasSurface;
    use scroll_hop::{Game, LoopControl, Tuning};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Scroll Hop starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let tuning = match canvas.get_attribute("data-tuning") {
            Some(json) => Tuning::from_json_or_default(&json),
            None => Tuning::default(),
        };

        let surface = CanvasSurface::new(&canvas, tuning.game_width, tuning.game_height)?;

        let now = js_sys::Date::now();
        let game = Game::new(now as u64, tuning, now);
        let app = Rc::new(RefCell::new(App { game, surface }));

        setup_input_handlers(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("Scroll Hop running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                if (key == "i" || key == "I") && !event.repeat() {
                    a.game.idle_mode = !a.game.idle_mode;
                    log::info!("Idle mode: {}", a.game.idle_mode);
                    return;
                }
                if a.game.input.apply_key(&key, event.key_code(), true) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut()
                    .game
                    .input
                    .apply_key(&event.key(), event.key_code(), false);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            game.frame(js_sys::Date::now(), surface)
        };

        if control == LoopControl::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use scroll_hop::render::Recorder;
    use scroll_hop::{Game, LoopControl, Tuning};

    /// Give up after five simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 5;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Scroll Hop (native) starting headless demo...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::error!("Could not read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(seed, tuning, 0.0);
    game.idle_mode = true;
    let mut surface = Recorder::new();

    let mut frames = 0;
    while frames < MAX_FRAMES {
        surface.clear();
        if game.frame(frames as f64 * FRAME_MS, &mut surface) == LoopControl::Stop {
            break;
        }
        frames += 1;
    }

    if game.state.dead {
        println!(
            "Game over after {} frames, final score {}",
            frames,
            game.state.score.display()
        );
    } else {
        println!(
            "Still alive after {} frames, score {}",
            frames,
            game.state.score.display()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
