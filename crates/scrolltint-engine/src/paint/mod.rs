//! Paint model shared between the viewer and the renderer.

mod color;

pub use color::Color;
