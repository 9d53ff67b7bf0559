//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, fixed per-frame displacements
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;

pub use input::{HeldKeys, PaddleInput};
pub use state::{Ball, GameState, Paddle, Score, Side};
pub use tick::{GameEvent, tick};
