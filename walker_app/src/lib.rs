//! `walker_app`
//!
//! Application-side systems:
//! - Frame scheduler (per-tick motion, render, and pacing)
//! - Host-event plumbing (keys, resize, fullscreen)
//! - Asset-load task wiring

pub mod events;
pub mod loader;
pub mod scheduler;

pub use scheduler::FrameScheduler;
