//! Browser frontend for the court game
//!
//! Owns the canvas, input handlers and the requestAnimationFrame loop. All
//! game rules live in [`crate::sim`]; this module only feeds it key state
//! and draws what comes back.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Response};

use crate::config::CourtConfig;
use crate::renderer::{Font, OrbitCamera, RenderState, Scene, TextStyle, typeset};
use crate::renderer::vertex::colors;
use crate::sim::{GameEvent, GameState, HeldKeys, tick};

/// Mouse drag sensitivity in radians per CSS pixel
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Glyph table served next to the wasm bundle
const FONT_URL: &str = "fonts/glyphs.json";

/// Game instance holding all state
struct Game {
    state: GameState,
    keys: HeldKeys,
    config: CourtConfig,
    scene: Scene,
    camera: OrbitCamera,
    render_state: Option<RenderState>,
    font: Font,
    /// Label text currently typeset into the scene
    label_text: String,
    dragging: bool,
    last_mouse: (f32, f32),
}

impl Game {
    fn new(seed: u64, config: CourtConfig) -> Self {
        let camera = OrbitCamera::overhead(config.camera_height);
        Self {
            state: GameState::new(seed, &config),
            keys: HeldKeys::default(),
            scene: Scene::new(&config),
            camera,
            config,
            render_state: None,
            font: Font::builtin(),
            label_text: String::new(),
            dragging: false,
            last_mouse: (0.0, 0.0),
        }
    }

    /// Advance the simulation one frame
    fn update(&mut self) {
        let events = tick(&mut self.state, &self.keys, &self.config);
        // Drop the label the moment a point lands; refresh_label re-typesets
        // it with the new score in the same frame
        if events.iter().any(|e| matches!(e, GameEvent::Goal(_))) {
            self.scene.clear_label();
            self.label_text.clear();
        }
    }

    /// Re-typeset the score label when the text changed
    fn refresh_label(&mut self) {
        let text = self.state.score.label();
        if text == self.label_text {
            return;
        }
        let mesh = typeset(&text, &self.font, &TextStyle::default(), colors::SCORE_TEXT);
        self.scene.set_label(mesh);
        self.label_text = text;
    }

    /// Render the current frame
    fn render(&mut self) {
        self.camera.update();
        let vertices = self.scene.assemble(&self.state);
        if let Some(ref mut render_state) = self.render_state {
            match render_state.render(&vertices, &self.camera) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }
}

pub async fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Court Pong starting...");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

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

    let config = CourtConfig::load();
    // Seed LocalStorage on first run so the layout can be edited in devtools
    config.save();
    let seed = js_sys::Date::now() as u64;
    let game = Rc::new(RefCell::new(Game::new(seed, config)));

    log::info!("Game initialized with seed: {}", seed);

    let render_state = RenderState::for_canvas(canvas.clone()).await;
    log::info!(
        "Surface ready at {}x{}",
        render_state.size.0,
        render_state.size.1
    );
    game.borrow_mut().render_state = Some(render_state);

    setup_input_handlers(&canvas, game.clone());
    spawn_font_fetch(game.clone());

    // Start game loop
    request_animation_frame(game);

    log::info!("Court Pong running!");
}

fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
    let window = web_sys::window().unwrap();

    // Keyboard press/release toggles held paddle keys
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if game.borrow_mut().keys.handle_key(&event.key(), true) {
                event.prevent_default();
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if game.borrow_mut().keys.handle_key(&event.key(), false) {
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mouse drag orbits the camera
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            g.dragging = true;
            g.last_mouse = (event.client_x() as f32, event.client_y() as f32);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            if !g.dragging {
                return;
            }
            let (x, y) = (event.client_x() as f32, event.client_y() as f32);
            let (lx, ly) = g.last_mouse;
            g.last_mouse = (x, y);
            g.camera
                .orbit((x - lx) * ORBIT_SENSITIVITY, (y - ly) * ORBIT_SENSITIVITY);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().dragging = false;
        });
        let _ = window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Fetch the glyph table in the background; the built-in font keeps the
/// label legible until (and in case) the fetch completes.
fn spawn_font_fetch(game: Rc<RefCell<Game>>) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_font(FONT_URL).await {
            Ok(font) => {
                let mut g = game.borrow_mut();
                g.font = font;
                // Force a re-typeset with the new glyphs
                g.label_text.clear();
                log::info!("Loaded glyph table from {}", FONT_URL);
            }
            Err(e) => {
                log::warn!("Glyph table fetch failed, using built-in font: {:?}", e);
            }
        }
    });
}

async fn fetch_font(url: &str) -> Result<Font, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "fetch returned status {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))?;
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let window = web_sys::window().unwrap();
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>) {
    {
        let mut g = game.borrow_mut();
        g.update();
        g.refresh_label();
        g.render();
    }

    request_animation_frame(game);
}
