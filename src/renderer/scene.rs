//! Scene assembly
//!
//! Static court geometry is baked once from the config; paddles and ball are
//! template meshes translated to their simulated positions every frame. The
//! score label occupies a single owned slot so a stale mesh can never linger
//! next to a fresh one.

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::config::CourtConfig;
use crate::consts::{BALL_RADIUS, PADDLE_HALF_DEPTH};
use crate::sim::GameState;

use super::shapes::{cuboid, uv_sphere};
use super::vertex::{Vertex, colors};

const FLOOR_HALF: Vec3 = Vec3::new(17.0, 0.05, 10.0);
const WALL_HALF: Vec3 = Vec3::new(0.5, 7.5, 10.0);
/// Paddles render wider than their hitbox so hits read as fair
const PADDLE_HALF: Vec3 = Vec3::new(0.05, 0.5, PADDLE_HALF_DEPTH);
const PADDLE_HEIGHT: f32 = 0.5;

const SPHERE_SECTORS: u32 = 24;
const SPHERE_STACKS: u32 = 12;

/// Score label mesh with its fixed placement above the court
struct Label {
    vertices: Vec<Vertex>,
    transform: Mat4,
}

pub struct Scene {
    court: Vec<Vertex>,
    paddle: Vec<Vertex>,
    ball: Vec<Vertex>,
    label: Option<Label>,
}

impl Scene {
    pub fn new(config: &CourtConfig) -> Self {
        let mut court = Vec::new();
        court.extend(cuboid(
            Vec3::new(0.0, -0.5, 0.0),
            FLOOR_HALF,
            colors::FLOOR,
        ));
        for sign in [-1.0, 1.0] {
            court.extend(cuboid(
                Vec3::new(sign * config.wall_bound, -0.5, 0.0),
                WALL_HALF,
                colors::WALL,
            ));
        }

        Self {
            court,
            paddle: cuboid(Vec3::ZERO, PADDLE_HALF, colors::PADDLE),
            ball: uv_sphere(BALL_RADIUS, colors::BALL, SPHERE_SECTORS, SPHERE_STACKS),
            label: None,
        }
    }

    /// Replace the score label mesh. Vertices are in text space; the label
    /// sits flat above the court, readable from the overhead camera.
    pub fn set_label(&mut self, vertices: Vec<Vertex>) {
        let transform =
            Mat4::from_translation(Vec3::new(-4.0, 2.0, -5.0)) * Mat4::from_rotation_x(-FRAC_PI_2);
        self.label = Some(Label {
            vertices,
            transform,
        });
    }

    pub fn clear_label(&mut self) {
        self.label = None;
    }

    /// Build the frame's full triangle list from the simulation state
    pub fn assemble(&self, state: &GameState) -> Vec<Vertex> {
        let mut out = self.court.clone();

        for paddle in [&state.left_paddle, &state.right_paddle] {
            let offset = Vec3::new(paddle.x, PADDLE_HEIGHT, paddle.z);
            out.extend(self.paddle.iter().map(|v| translated(v, offset)));
        }

        out.extend(self.ball.iter().map(|v| translated(v, state.ball.pos)));

        if let Some(label) = &self.label {
            out.extend(label.vertices.iter().map(|v| {
                let pos = label.transform.transform_point3(Vec3::from_array(v.position));
                let normal = label.transform.transform_vector3(Vec3::from_array(v.normal));
                Vertex::new(pos, normal, v.color)
            }));
        }

        out
    }
}

fn translated(v: &Vertex, offset: Vec3) -> Vertex {
    Vertex::new(
        Vec3::from_array(v.position) + offset,
        Vec3::from_array(v.normal),
        v.color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    fn scene_and_state() -> (Scene, GameState) {
        let config = CourtConfig::default();
        (Scene::new(&config), GameState::new(7, &config))
    }

    #[test]
    fn test_assemble_counts_bodies() {
        let (scene, state) = scene_and_state();
        let verts = scene.assemble(&state);
        // Floor + 2 walls + 2 paddles (36 each) + ball
        let expected = 36 * 5 + (SPHERE_SECTORS * SPHERE_STACKS * 6) as usize;
        assert_eq!(verts.len(), expected);
    }

    #[test]
    fn test_paddles_follow_state() {
        let (scene, mut state) = scene_and_state();
        state.left_paddle.z = 3.0;
        let verts = scene.assemble(&state);
        // Some vertex of the left paddle mesh sits near x = -8, z near 3
        assert!(verts.iter().any(|v| {
            (v.position[0] + 8.0).abs() < 0.1 && (v.position[2] - 3.0).abs() <= 1.5 + 1e-4
        }));
    }

    #[test]
    fn test_ball_centered_on_position() {
        let (scene, mut state) = scene_and_state();
        state.ball.pos = Vec3::new(2.0, 0.5, -1.0);
        let verts = scene.assemble(&state);
        let ball_color = colors::BALL;
        for v in verts.iter().filter(|v| v.color == ball_color) {
            let d = Vec3::from_array(v.position) - state.ball.pos;
            assert!((d.length() - BALL_RADIUS).abs() < 1e-4);
        }
    }

    #[test]
    fn test_label_slot_is_exclusive() {
        let (mut scene, state) = scene_and_state();
        let bare = scene.assemble(&state).len();

        scene.set_label(vec![
            Vertex::new(Vec3::ZERO, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::X, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::Y, Vec3::Z, colors::SCORE_TEXT),
        ]);
        assert_eq!(scene.assemble(&state).len(), bare + 3);

        // Replacing the label swaps the mesh instead of stacking another
        scene.set_label(vec![
            Vertex::new(Vec3::ZERO, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::X, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::Y, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::ZERO, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::X, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::Y, Vec3::Z, colors::SCORE_TEXT),
        ]);
        assert_eq!(scene.assemble(&state).len(), bare + 6);

        scene.clear_label();
        assert_eq!(scene.assemble(&state).len(), bare);
    }

    #[test]
    fn test_label_lies_flat() {
        let (mut scene, state) = scene_and_state();
        // A +Z text normal must face up after the label is laid flat
        scene.set_label(vec![
            Vertex::new(Vec3::ZERO, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::X, Vec3::Z, colors::SCORE_TEXT),
            Vertex::new(Vec3::Y, Vec3::Z, colors::SCORE_TEXT),
        ]);
        let verts = scene.assemble(&state);
        let label_vert = verts
            .iter()
            .find(|v| v.color == colors::SCORE_TEXT)
            .unwrap();
        assert!((label_vert.normal[1] - 1.0).abs() < 1e-5);
    }
}
