//! Game state and core simulation types
//!
//! Everything the per-frame step reads and writes lives in one explicit
//! [`GameState`] so the simulation can run headless, without a live
//! rendering surface. Nothing here is persisted.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::CourtConfig;
use crate::consts::*;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of this side's play-axis coordinate
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A paddle: fixed on the play axis (x), mobile on the rally axis (z)
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    /// Fixed play-axis coordinate
    pub x: f32,
    /// Rally-axis coordinate, kept within ±paddle_range by the move guard
    pub z: f32,
}

impl Paddle {
    pub fn new(side: Side, paddle_offset: f32) -> Self {
        Self {
            side,
            x: side.sign() * paddle_offset,
            z: 0.0,
        }
    }

    /// Hitbox test against a ball position
    pub fn overlaps(&self, ball_pos: Vec3) -> bool {
        (ball_pos.x - self.x).abs() <= PADDLE_HALF_WIDTH
            && (ball_pos.z - self.z).abs() <= PADDLE_HALF_DEPTH
    }
}

/// The ball. Height (y) is fixed; motion happens on the play and rally axes.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, BALL_HEIGHT, 0.0),
            vel: Vec3::new(SERVE_SPEED, 0.0, 0.0),
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Points per player. Player 1 defends the left end and scores at the right
/// goal plane; player 2 the reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    /// Display string for the score label mesh
    pub fn label(&self) -> String {
        format!("score : {} - {}", self.player1, self.player2)
    }
}

/// Complete game state, advanced once per rendered frame
#[derive(Debug, Clone)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Frame counter, for logging and the demo mode
    pub frame: u64,
    /// Seeded RNG; the only nondeterminism is the spin drawn on paddle hits
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, config: &CourtConfig) -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left, config.paddle_offset),
            right_paddle: Paddle::new(Side::Right, config.paddle_offset),
            ball: Ball::new(),
            score: Score::default(),
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered_at_offset() {
        let config = CourtConfig::default();
        let state = GameState::new(7, &config);
        assert_eq!(state.left_paddle.x, -8.0);
        assert_eq!(state.right_paddle.x, 8.0);
        assert_eq!(state.left_paddle.z, 0.0);
        assert_eq!(state.right_paddle.z, 0.0);
    }

    #[test]
    fn test_paddle_hitbox() {
        let paddle = Paddle::new(Side::Right, 8.0);
        // Inside both tolerances
        assert!(paddle.overlaps(Vec3::new(8.2, 0.5, 1.0)));
        assert!(paddle.overlaps(Vec3::new(7.8, 0.5, -1.0)));
        // Outside play-axis tolerance
        assert!(!paddle.overlaps(Vec3::new(8.3, 0.5, 0.0)));
        // Outside rally-axis tolerance
        assert!(!paddle.overlaps(Vec3::new(8.0, 0.5, 1.6)));
    }

    #[test]
    fn test_score_label() {
        let score = Score {
            player1: 1,
            player2: 0,
        };
        assert_eq!(score.label(), "score : 1 - 0");
        assert_eq!(Score::default().label(), "score : 0 - 0");
    }
}
