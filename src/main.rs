//! Tower Stack entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use tower_stack::platform::BrowserFrames;
    use tower_stack::platform::web::FrameCallback;
    use tower_stack::renderer::RenderState;
    use tower_stack::sim::GameEvent;
    use tower_stack::{Session, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session<BrowserFrames>,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        // Last values pushed to the DOM
        shown_score: Option<u32>,
        shown_game_over: Option<bool>,
    }

    impl Game {
        fn new(session: Session<BrowserFrames>, canvas: HtmlCanvasElement) -> Self {
            Self {
                session,
                render_state: None,
                canvas,
                shown_score: None,
                shown_game_over: None,
            }
        }

        /// Frame callback: advance, draw, refresh HUD
        fn frame(&mut self) {
            match self.session.on_frame() {
                Some(GameEvent::Placed { floor, trimmed, .. }) if trimmed == 0.0 => {
                    log::debug!("Perfect drop on floor {}", floor);
                }
                Some(GameEvent::Collapsed { floor }) => {
                    log::info!("Tower collapsed, reached floor {}", floor);
                }
                _ => {}
            }
            self.fit_canvas();
            self.render();
            self.update_hud();
        }

        /// Keep the drawing buffer in sync with the CSS size
        fn fit_canvas(&mut self) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            let width = (self.canvas.client_width() as f64 * dpr) as u32;
            let height = (self.canvas.client_height() as f64 * dpr) as u32;
            if (width, height) != render_state.size() && width > 0 && height > 0 {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                render_state.resize(width, height);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let snapshot = self.session.snapshot();
                match render_state.render(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size();
                        render_state.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let score = self.session.state().score();
            let game_over = self.session.state().is_game_over();

            if self.shown_score != Some(score) {
                if let Some(el) = document.query_selector("#hud-score .score-number").ok().flatten() {
                    el.set_text_content(Some(&score.to_string()));
                }
                self.shown_score = Some(score);
            }

            if self.shown_game_over != Some(game_over) {
                if let Some(el) = document.get_element_by_id("game-over") {
                    if game_over {
                        let _ = el.set_attribute("class", "glass-overlay");
                    } else {
                        let _ = el.set_attribute("class", "glass-overlay hidden");
                    }
                }
                if let Some(el) = document.get_element_by_id("final-floor") {
                    el.set_text_content(Some(&score.to_string()));
                }
                self.shown_game_over = Some(game_over);
            }
        }

        fn restart(&mut self) {
            self.session.restart();
            // Redraw now; the next frame may be a while away on a hidden tab
            self.render();
            self.update_hud();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tower Stack starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = Tuning::load();

        // The frame closure captures the game, so it is installed afterwards
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let frames = BrowserFrames::new(window.clone(), callback.clone());
        let game = Rc::new(RefCell::new(Game::new(
            Session::new(tuning, frames),
            canvas.clone(),
        )));
        {
            let game = game.clone();
            *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                game.borrow_mut().frame();
            }));
        }

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, tuning).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_rebuild_button(game.clone());
        setup_teardown(game.clone());

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud-score") {
            let _ = hud.set_attribute("class", "hud");
        }

        // Start game loop
        if game.borrow_mut().session.start() {
            log::info!("Tower Stack running!");
        } else {
            log::error!("Could not start the frame clock");
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click - drop
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.queue_drop();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - drop (suppress the emulated mouse event)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().session.queue_drop();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        g.session.queue_drop();
                    }
                    "r" | "R" if g.session.state().is_game_over() => g.restart(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_rebuild_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("rebuild-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Cancel the frame loop when the page goes away
    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().session.teardown();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frames after which a native demo run is cut short
#[cfg(not(target_arch = "wasm32"))]
const FRAME_BUDGET: u32 = 500_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use tower_stack::autoplay::Autoplay;
    use tower_stack::platform::HeadlessFrames;
    use tower_stack::sim::GameEvent;
    use tower_stack::{Session, Tuning};

    env_logger::init();
    log::info!("Tower Stack (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            let tuning = Tuning::from_json(&text)
                .with_context(|| format!("parsing tuning file {path}"))?;
            tuning.validate().context("invalid tuning")?;
            tuning
        }
        None => Tuning::load(),
    };

    let bot = Autoplay::default();
    let mut session = Session::new(tuning, HeadlessFrames::new());
    anyhow::ensure!(session.start(), "frame clock failed to start");

    let mut frames = 0;
    while session.is_running() && frames < FRAME_BUDGET {
        if bot.wants_drop(session.state()) {
            session.queue_drop();
        }
        if let Some(GameEvent::Placed { floor, slab, trimmed }) = session.pump() {
            log::info!(
                "Floor {floor}: x={:.1} width={:.1} trimmed={trimmed:.1}",
                slab.x,
                slab.width
            );
        }
        frames += 1;
    }
    session.teardown();

    log::info!(
        "Demo finished after {frames} frames at floor {}",
        session.state().score()
    );
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
