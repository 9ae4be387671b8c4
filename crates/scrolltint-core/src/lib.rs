//! Scroll-driven background color blending.
//!
//! A page marks some elements with `data-color-point="R,G,B"`. As the page
//! scrolls, [`ColorBlendController`] finds the two points bracketing the
//! scroll offset and writes the linear blend of their colors to the page
//! background; outside the marked range the nearest endpoint color is used.
//!
//! The crate is host-agnostic. A host implements [`MarkedElement`] for its
//! elements and [`ScrollSurface`] for its document, builds a controller with
//! [`ColorBlendController::install`], and forwards scroll events to it through
//! [`ScrollListener`].
//!
//! ```
//! use scrolltint_core::{BlendConfig, ColorBlendController, ColorPoint, OrderPolicy, Rgb};
//!
//! let config = BlendConfig::new(
//!     vec![
//!         ColorPoint::new(0, Rgb::new(255, 0, 0)),
//!         ColorPoint::new(100, Rgb::new(0, 0, 255)),
//!     ],
//!     OrderPolicy::Sort,
//! )
//! .unwrap();
//! let controller = ColorBlendController::new(config);
//! assert_eq!(controller.color_at(50.0).to_string(), "rgb(128,0,128)");
//! ```

mod blend;
mod config;
mod controller;
mod error;
mod host;
mod parse;
mod point;
mod rgb;

#[cfg(test)]
mod testing;

pub use blend::blend;
pub use config::{BlendConfig, BlendOptions, InvalidPointPolicy, OrderPolicy};
pub use controller::{ColorBlendController, Sample, Span};
pub use error::{ColorParseError, ConfigError};
pub use host::{
    COLOR_POINT_ATTR, COLOR_POINT_CLASSNAME_ATTR, MarkedElement, ScrollListener, ScrollSurface,
    document_offset,
};
pub use parse::parse_color_point;
pub use point::ColorPoint;
pub use rgb::Rgb;
