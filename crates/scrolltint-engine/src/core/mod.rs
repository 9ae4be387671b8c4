//! Contracts between the window runtime and the layers built on it.
//!
//! The runtime owns the event loop, window and GPU; an [`App`] only sees a
//! per-frame [`FrameCtx`] and answers with an [`AppControl`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
