//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend.
//! Define traits that a renderer implementation would satisfy, plus no-op
//! implementations for headless runs and tests.

use crate::scene::{Camera, Scene, Viewport};

/// A minimal rendering API, invoked once per tick.
pub trait Renderer: Send {
    fn render(&mut self, scene: &Scene, camera: &Camera);
    fn resize(&mut self, viewport: Viewport);
}

/// Camera controls updated once per tick (orbit/damping live behind this).
pub trait CameraControls: Send {
    fn update(&mut self);
}

/// Host window surface: fullscreen state lives here.
pub trait WindowHost: Send {
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn is_fullscreen(&self) -> bool;
}

/// A no-op renderer useful for headless tests.
#[derive(Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _scene: &Scene, _camera: &Camera) {}
    fn resize(&mut self, _viewport: Viewport) {}
}

/// No-op camera controls.
#[derive(Default)]
pub struct NullControls;

impl CameraControls for NullControls {
    fn update(&mut self) {}
}

/// Windowless host that just remembers the fullscreen flag.
#[derive(Default)]
pub struct NullWindow {
    fullscreen: bool,
}

impl WindowHost for NullWindow {
    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}
