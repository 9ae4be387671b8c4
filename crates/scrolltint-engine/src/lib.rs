//! scrolltint engine crate.
//!
//! Owns the platform and GPU pieces the page viewer runs on: a single-window
//! winit runtime, the wgpu device and surface, platform-agnostic input, and a
//! solid rectangle renderer. Nothing here knows about pages or color points.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
