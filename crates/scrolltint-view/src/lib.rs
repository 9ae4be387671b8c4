//! Windowed viewer for scrolltint pages.
//!
//! Parses a page, lays it out, and hosts a
//! [`ColorBlendController`](scrolltint_core::ColorBlendController) as the
//! page's only scroll listener. Each frame clears to the current body
//! background and paints element `fill`s on top.
//!
//! ```rust,ignore
//! scrolltint_view::Application::new()
//!     .title("Demo")
//!     .run(include_str!("demo.tint"))?;
//! ```

pub mod app;
pub mod host;
pub mod scroll;

pub use app::{Application, PageView};
pub use host::{InstallError, MarkedBox, PageHost};
pub use scroll::{ScrollConfig, ScrollState};
