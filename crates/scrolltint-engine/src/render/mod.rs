//! GPU rendering.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.
//! - Colors are linear premultiplied ([`crate::paint::Color`]).

mod ctx;
mod rect;

pub use ctx::{RenderCtx, RenderTarget};
pub use rect::{FillRect, RectRenderer};
