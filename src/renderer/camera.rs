//! Orbit camera
//!
//! Perspective camera that orbits a target point, driven by mouse drag with
//! light damping. Purely presentational; the simulation never reads it.

use glam::{Mat4, Vec3};

/// Vertical field of view in radians (75 degrees)
const FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Pitch is clamped just short of straight down to keep the up vector stable
const PITCH_LIMIT: f32 = 1.45;

/// Fraction of the remaining yaw/pitch delta applied per frame
const DAMPING: f32 = 0.15;

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    yaw: f32,
    pitch: f32,
    // Where the drag wants the camera to be; `update` eases toward it
    target_yaw: f32,
    target_pitch: f32,
}

impl OrbitCamera {
    /// Camera hovering above the court center, looking down at it
    pub fn overhead(height: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: height,
            yaw: 0.0,
            pitch: PITCH_LIMIT,
            target_yaw: 0.0,
            target_pitch: PITCH_LIMIT,
        }
    }

    /// Camera in front of the target at a shallow angle (text demo)
    pub fn facing(distance: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance,
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.3,
            target_yaw: std::f32::consts::FRAC_PI_2,
            target_pitch: 0.3,
        }
    }

    /// Apply a drag delta (radians)
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.target_yaw += d_yaw;
        self.target_pitch = (self.target_pitch + d_pitch).clamp(0.05, PITCH_LIMIT);
    }

    /// Ease toward the dragged orientation; call once per frame
    pub fn update(&mut self) {
        self.yaw += (self.target_yaw - self.yaw) * DAMPING;
        self.pitch += (self.target_pitch - self.pitch) * DAMPING;
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    /// Combined view-projection matrix for the given aspect ratio
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        proj * view
    }
}
