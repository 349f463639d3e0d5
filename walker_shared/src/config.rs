//! Configuration system.
//!
//! Loads walk-demo configuration from JSON strings/files (file IO left to
//! the app). Defaults mirror the tuning the demo ships with.

use serde::{Deserialize, Serialize};

/// Root configuration for the walk demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Distance moved per frame per held key.
    #[serde(default = "default_step_size")]
    pub step_size: f32,
    /// Per-frame facing interpolation fraction, in (0, 1].
    #[serde(default = "default_rotation_smoothing")]
    pub rotation_smoothing: f32,
    /// Path to the avatar model.
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// Target frame rate when no display refresh signal is available.
    #[serde(default = "default_frame_hz")]
    pub frame_hz: u32,
    /// Initial window width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Initial window height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_step_size() -> f32 {
    0.1
}

fn default_rotation_smoothing() -> f32 {
    0.1
}

fn default_model_path() -> String {
    "models/avatar.glb".to_string()
}

fn default_frame_hz() -> u32 {
    60
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            step_size: default_step_size(),
            rotation_smoothing: default_rotation_smoothing(),
            model_path: default_model_path(),
            frame_hz: default_frame_hz(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WalkerConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
