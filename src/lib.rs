//! Court Pong - a minimal 3D Pong in the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (held keys, per-frame step, scoring)
//! - `renderer`: WebGPU rendering pipeline (court scene, 3D score text)
//! - `config`: Data-driven court layout and rules

pub mod config;
pub mod renderer;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod text_demo;

pub use config::{CourtConfig, ServePolicy};

/// Game constants fixed by the rules (layout constants live in [`CourtConfig`])
pub mod consts {
    /// Paddle displacement per frame while a key is held
    pub const PADDLE_SPEED: f32 = 0.3;
    /// Half-width of the paddle hitbox along the play axis
    pub const PADDLE_HALF_WIDTH: f32 = 0.25;
    /// Half-depth of the paddle hitbox along the rally axis
    pub const PADDLE_HALF_DEPTH: f32 = 1.5;

    /// Ball sphere radius
    pub const BALL_RADIUS: f32 = 0.3;
    /// Ball hovers at a fixed height above the floor
    pub const BALL_HEIGHT: f32 = 0.5;
    /// Play-axis speed of a fresh serve
    pub const SERVE_SPEED: f32 = 0.1;
    /// Rally-axis velocity after a paddle hit is drawn from [0, SPIN_MAX)
    pub const SPIN_MAX: f32 = 0.1;

    /// The side-wall bounce planes sit this far inside the goal planes
    pub const RALLY_MARGIN: f32 = 5.0;
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser entry point for the game.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run_game() {
    app::run().await;
}

/// Browser entry point for the standalone text-rendering demo.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run_text_demo() {
    text_demo::run().await;
}
