//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates window events into [`InputEvent`]s and accumulates them
//! in an [`InputFrame`] until the next frame consumes them.

mod frame;
mod types;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseWheelDelta};
