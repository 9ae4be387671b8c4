//! In-memory host doubles shared by the unit tests.

use crate::host::{COLOR_POINT_ATTR, COLOR_POINT_CLASSNAME_ATTR, MarkedElement, ScrollSurface};
use crate::rgb::Rgb;

pub(crate) struct FakeElement {
    top: f64,
    color: Option<String>,
    class_name: Option<String>,
}

impl FakeElement {
    pub(crate) fn new(top: f64, color: &str) -> Self {
        Self { top, color: Some(color.to_string()), class_name: None }
    }

    pub(crate) fn without_color(top: f64) -> Self {
        Self { top, color: None, class_name: None }
    }

    pub(crate) fn class(mut self, name: &str) -> Self {
        self.class_name = Some(name.to_string());
        self
    }
}

impl MarkedElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            COLOR_POINT_ATTR => self.color.as_deref(),
            COLOR_POINT_CLASSNAME_ATTR => self.class_name.as_deref(),
            _ => None,
        }
    }

    fn bounding_top(&self) -> f64 {
        self.top
    }
}

#[derive(Default)]
pub(crate) struct FakeSurface {
    pub(crate) scroll_top: f64,
    pub(crate) client_top: f64,
    pub(crate) background: Option<Rgb>,
    pub(crate) writes: usize,
    pub(crate) active_class: Option<String>,
}

impl FakeSurface {
    pub(crate) fn scrolled_to(scroll_top: f64) -> Self {
        Self { scroll_top, ..Self::default() }
    }
}

impl ScrollSurface for FakeSurface {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn client_top(&self) -> f64 {
        self.client_top
    }

    fn set_background(&mut self, color: Rgb) {
        self.background = Some(color);
        self.writes += 1;
    }

    fn set_active_class(&mut self, class_name: Option<&str>) {
        self.active_class = class_name.map(str::to_string);
    }
}
