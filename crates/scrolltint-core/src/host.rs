//! Contracts between the controller and the environment hosting the page.
//!
//! A host supplies element geometry and scroll position, accepts background
//! writes, and delivers scroll notifications to a registered
//! [`ScrollListener`].

use crate::rgb::Rgb;

/// Attribute marking an element as a color point; value is `"R,G,B"`.
pub const COLOR_POINT_ATTR: &str = "data-color-point";

/// Optional class name published while the point's span is active.
pub const COLOR_POINT_CLASSNAME_ATTR: &str = "data-color-point-classname";

/// An element that may carry color-point attributes.
pub trait MarkedElement {
    /// Attribute value as text, or `None` when absent or not textual.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Top edge relative to the current viewport top, in pixels.
    fn bounding_top(&self) -> f64;
}

impl<T: MarkedElement + ?Sized> MarkedElement for &T {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn bounding_top(&self) -> f64 {
        (**self).bounding_top()
    }
}

/// The scrollable document surface whose background is being driven.
pub trait ScrollSurface {
    /// Vertical scroll offset of the viewport, in pixels.
    fn scroll_top(&self) -> f64;

    /// Width of the document's top border, subtracted from element offsets.
    fn client_top(&self) -> f64 {
        0.0
    }

    /// Writes the body background.
    fn set_background(&mut self, color: Rgb);

    /// Publishes the class name of the active color point, if it has one.
    fn set_active_class(&mut self, class_name: Option<&str>) {
        let _ = class_name;
    }
}

/// Receives scroll notifications from a host.
pub trait ScrollListener {
    fn on_scroll(&mut self, surface: &mut dyn ScrollSurface);
}

/// Document-space offset of an element: viewport-relative top plus the
/// scroll position, minus the document's client top, rounded half up.
pub fn document_offset(bounding_top: f64, scroll_top: f64, client_top: f64) -> i64 {
    (bounding_top + scroll_top - client_top + 0.5).floor() as i64
}
