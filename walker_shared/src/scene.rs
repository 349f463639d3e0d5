//! Scene description.
//!
//! Plain data consumed by a [`Renderer`](crate::render::Renderer)
//! implementation: the ground plane, the two lights, the camera, and the
//! avatar slot. No GPU types live here.

use serde::{Deserialize, Serialize};

use crate::{avatar::AvatarState, math::Vec3};

/// Ground plane the avatar walks on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlane {
    pub size: f32,
    pub color: String,
    pub metalness: f32,
    pub roughness: f32,
    pub receive_shadow: bool,
}

impl Default for FloorPlane {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: "#444444".to_string(),
            metalness: 0.0,
            roughness: 0.5,
            receive_shadow: true,
        }
    }
}

/// Ambient sky/ground light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HemisphereLight {
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for HemisphereLight {
    fn default() -> Self {
        Self {
            intensity: 0.61,
            position: Vec3::new(0.0, 50.0, 0.0),
        }
    }
}

/// Shadow-casting key light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
    pub shadow_map_size: (u32, u32),
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            intensity: 0.54,
            position: Vec3::new(-8.0, 12.0, 8.0),
            cast_shadow: true,
            shadow_map_size: (1024, 1024),
        }
    }
}

/// Everything a renderer needs to draw a frame.
///
/// The avatar slot stays `None` until the model load publishes its state;
/// the frame loop owns the scene and is the slot's only writer.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub floor: FloorPlane,
    pub hemisphere: HemisphereLight,
    pub directional: DirectionalLight,
    pub avatar: Option<AvatarState>,
}

/// Perspective camera, pass-through as far as the frame loop is concerned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            aspect,
        }
    }

    /// Called on window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

/// Window-size record kept in sync with the host window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Device pixel ratios above 2 buy nothing visually and cost fill rate.
    pub const MAX_PIXEL_RATIO: f32 = 2.0;

    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: device_pixel_ratio.min(Self::MAX_PIXEL_RATIO),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
