//! `walker_shared`
//!
//! Shared libraries used by the walk-demo application and tests.
//!
//! Design goals:
//! - Deterministic and modular where practical.
//! - Clear separation of concerns (input, motion, avatar, scene, assets).
//! - Traits for abstraction and dependency injection.
//! - No `unsafe`.

pub mod asset;
pub mod avatar;
pub mod config;
pub mod input;
pub mod math;
pub mod motion;
pub mod render;
pub mod scene;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::asset::*;
    pub use crate::avatar::*;
    pub use crate::config::*;
    pub use crate::input::*;
    pub use crate::math::*;
    pub use crate::motion::*;
    pub use crate::render::*;
    pub use crate::scene::*;
}
