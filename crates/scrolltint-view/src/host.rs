//! The page viewer's side of the color-point contracts.

use std::fmt;

use scrolltint_core::{
    BlendOptions, ColorBlendController, ConfigError, MarkedElement, Rgb, ScrollListener,
    ScrollSurface,
};
use scrolltint_page::LayoutBox;

use crate::scroll::ScrollState;

/// A laid-out element seen from the current viewport.
pub struct MarkedBox<'l, 'a> {
    layout: &'l LayoutBox<'a>,
    scroll_top: f32,
}

impl<'l, 'a> MarkedBox<'l, 'a> {
    pub fn new(layout: &'l LayoutBox<'a>, scroll_top: f32) -> Self {
        Self { layout, scroll_top }
    }
}

impl MarkedElement for MarkedBox<'_, '_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.layout.element.attr_str(name)
    }

    fn bounding_top(&self) -> f64 {
        f64::from(self.layout.top - self.scroll_top)
    }
}

/// Why [`PageHost::install_color_blend`] registered nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// The page already has its scroll listener.
    AlreadyInstalled,
    Config(ConfigError),
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallError::AlreadyInstalled => f.write_str("a scroll listener is already installed"),
            InstallError::Config(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstallError::Config(e) => Some(e),
            InstallError::AlreadyInstalled => None,
        }
    }
}

impl From<ConfigError> for InstallError {
    fn from(e: ConfigError) -> Self {
        InstallError::Config(e)
    }
}

/// Document state the viewer exposes to its scroll listener.
///
/// A page has at most one listener, notified only when the clamped scroll
/// offset changes. Registration is permanent for the life of the host.
pub struct PageHost {
    scroll: ScrollState,
    background: Rgb,
    active_class: Option<String>,
    listener: Option<Box<dyn ScrollListener>>,
}

impl PageHost {
    pub fn new(scroll: ScrollState, background: Rgb) -> Self {
        Self {
            scroll,
            background,
            active_class: None,
            listener: None,
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn active_class(&self) -> Option<&str> {
        self.active_class.as_deref()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn has_scroll_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Registers `listener` unless one is already present, in which case it
    /// is handed back.
    pub fn set_scroll_listener(
        &mut self,
        listener: Box<dyn ScrollListener>,
    ) -> Result<(), Box<dyn ScrollListener>> {
        if self.listener.is_some() {
            return Err(listener);
        }
        self.listener = Some(listener);
        Ok(())
    }

    /// Reads the color points among `boxes`, and on success registers a
    /// controller as this page's scroll listener.
    ///
    /// On failure nothing is registered and the background is left alone.
    pub fn install_color_blend<'l, 'a: 'l, I>(
        &mut self,
        boxes: I,
        options: BlendOptions,
    ) -> Result<(), InstallError>
    where
        I: IntoIterator<Item = &'l LayoutBox<'a>>,
    {
        if self.has_scroll_listener() {
            return Err(InstallError::AlreadyInstalled);
        }
        let scroll_top = self.scroll.offset();
        let marked = boxes.into_iter().map(|b| MarkedBox::new(b, scroll_top));
        let controller = ColorBlendController::install(marked, &*self, options)?;
        log::info!("color blend active with {} points", controller.config().points().len());
        self.set_scroll_listener(Box::new(controller))
            .map_err(|_| InstallError::AlreadyInstalled)
    }

    /// Mutates the scroll state and notifies the listener if the offset moved.
    pub fn scroll_with(&mut self, f: impl FnOnce(&mut ScrollState) -> bool) -> bool {
        let changed = f(&mut self.scroll);
        if changed {
            self.dispatch_scroll();
        }
        changed
    }

    fn dispatch_scroll(&mut self) {
        if let Some(mut listener) = self.listener.take() {
            listener.on_scroll(self);
            self.listener = Some(listener);
        }
    }
}

impl ScrollSurface for PageHost {
    fn scroll_top(&self) -> f64 {
        f64::from(self.scroll.offset())
    }

    fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    fn set_active_class(&mut self, class_name: Option<&str>) {
        if self.active_class.as_deref() != class_name {
            self.active_class = class_name.map(str::to_string);
        }
    }
}
