//! Per-frame simulation step
//!
//! Advances the world by exactly one rendered frame. All rates are fixed
//! per-frame displacements; there is no timestep scaling. Order matters and
//! follows the rules: paddles, ball translation, wall bounce, scoring,
//! paddle collision.

use rand::Rng;

use super::input::{HeldKeys, PaddleInput};
use super::state::{GameState, Paddle, Side};
use crate::CourtConfig;
use crate::consts::*;

/// Things that happened during one step, for the frontend to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Rally-axis velocity was reflected off a side wall
    WallBounce,
    /// The ball bounced off this side's paddle
    PaddleHit(Side),
    /// This side scored a point
    Goal(Side),
}

/// Move one paddle according to its held directions.
///
/// Both directions are checked independently; holding both can net zero.
/// The guard is exclusive on the current position in both directions, so a
/// paddle never starts a step from outside ±range.
fn move_paddle(paddle: &mut Paddle, up: bool, down: bool, range: f32) {
    if up && paddle.z > -range {
        paddle.z -= PADDLE_SPEED;
    }
    if down && paddle.z < range {
        paddle.z += PADDLE_SPEED;
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, keys: &HeldKeys, config: &CourtConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    // 1. Paddle movement
    move_paddle(
        &mut state.left_paddle,
        keys.is_held(PaddleInput::LeftUp),
        keys.is_held(PaddleInput::LeftDown),
        config.paddle_range,
    );
    move_paddle(
        &mut state.right_paddle,
        keys.is_held(PaddleInput::RightUp),
        keys.is_held(PaddleInput::RightDown),
        config.paddle_range,
    );

    // 2. Ball translation
    state.ball.pos.x += state.ball.vel.x;
    state.ball.pos.z += state.ball.vel.z;

    // 3. Wall bounce. Reflection only - the ball may sit past the plane for
    // one frame before direction reverses.
    let rally_bound = config.rally_bound();
    if state.ball.pos.z >= rally_bound || state.ball.pos.z <= -rally_bound {
        state.ball.vel.z = -state.ball.vel.z;
        events.push(GameEvent::WallBounce);
    }

    // 4. Scoring. Crossing the right goal plane scores for player 1 (left
    // side), and vice versa.
    if state.ball.pos.x >= config.wall_bound {
        state.score.player1 += 1;
        log::info!(
            "point for player 1: {} - {}",
            state.score.player1,
            state.score.player2
        );
        reset_after_goal(state, config, Side::Right);
        events.push(GameEvent::Goal(Side::Left));
    } else if state.ball.pos.x <= -config.wall_bound {
        state.score.player2 += 1;
        log::info!(
            "point for player 2: {} - {}",
            state.score.player1,
            state.score.player2
        );
        reset_after_goal(state, config, Side::Left);
        events.push(GameEvent::Goal(Side::Right));
    }

    // 5. Score display refresh happens in the frontend: it re-typesets the
    // label only when the score string changed.

    // 6. Paddle collision, using the positions updated this frame
    let hit_side = if state.left_paddle.overlaps(state.ball.pos) {
        Some(Side::Left)
    } else if state.right_paddle.overlaps(state.ball.pos) {
        Some(Side::Right)
    } else {
        None
    };
    if let Some(side) = hit_side {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.z = state.rng.random_range(0.0..SPIN_MAX);
        log::debug!("paddle hit on {:?} side at frame {}", side, state.frame);
        events.push(GameEvent::PaddleHit(side));
    }

    events
}

/// Reset the ball after a goal at the given side's plane
fn reset_after_goal(state: &mut GameState, config: &CourtConfig, crossed: Side) {
    state.ball.pos.x = 0.0;
    state.ball.vel.z = 0.0;
    match config.serve {
        // Play-axis velocity untouched, the ball keeps heading toward the
        // goal it just crossed
        crate::ServePolicy::KeepHeading => {}
        // Re-serve toward the conceding side at the fixed serve speed
        crate::ServePolicy::FixedServe => {
            state.ball.vel.x = crossed.sign() * SERVE_SPEED;
        }
    }
}
