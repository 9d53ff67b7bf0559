//! Court layout and game rules
//!
//! One configurable description of the court, read by both the scene builder
//! and the simulation. The config persists in LocalStorage; game state never
//! does.

use serde::{Deserialize, Serialize};

use crate::consts::RALLY_MARGIN;

/// What happens to the ball's play-axis velocity after a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServePolicy {
    /// Keep the current play-axis heading after the reset; the ball continues
    /// toward the goal it just crossed
    #[default]
    KeepHeading,
    /// Re-serve toward the side that conceded, at the fixed serve speed
    FixedServe,
}

/// Court layout constants and rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtConfig {
    /// Half-width of the arena along the play axis; goal planes sit at ±wall_bound
    pub wall_bound: f32,
    /// Paddles are fixed at ±paddle_offset on the play axis
    pub paddle_offset: f32,
    /// Paddles may roam [-paddle_range, paddle_range] on the rally axis
    pub paddle_range: f32,
    /// Camera height above the court
    pub camera_height: f32,
    /// Ball velocity handling after a goal
    pub serve: ServePolicy,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            wall_bound: 12.0,
            paddle_offset: 8.0,
            paddle_range: 6.0,
            camera_height: 10.0,
            serve: ServePolicy::default(),
        }
    }
}

impl CourtConfig {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "court_pong_config";

    /// Rally-axis coordinate of the side-wall bounce planes
    pub fn rally_bound(&self) -> f32 {
        self.wall_bound - RALLY_MARGIN
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded court config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default court config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Court config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_reference_court() {
        let config = CourtConfig::default();
        assert_eq!(config.wall_bound, 12.0);
        assert_eq!(config.paddle_offset, 8.0);
        assert_eq!(config.paddle_range, 6.0);
        assert_eq!(config.rally_bound(), 7.0);
        assert_eq!(config.serve, ServePolicy::KeepHeading);
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = CourtConfig::default();
        config.serve = ServePolicy::FixedServe;
        config.wall_bound = 15.0;

        let json = serde_json::to_string(&config).unwrap();
        let back: CourtConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.serve, ServePolicy::FixedServe);
        assert_eq!(back.wall_bound, 15.0);
        assert_eq!(back.rally_bound(), 10.0);
    }
}
