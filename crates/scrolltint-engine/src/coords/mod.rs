//! Geometry shared by the renderer and the viewer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod viewport;

pub use rect::Rect;
pub use viewport::Viewport;
