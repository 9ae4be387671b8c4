use scrolltint_engine::input::{InputFrame, Key, Modifiers, MouseWheelDelta};

/// How input maps to scroll distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollConfig {
    /// Pixels per wheel notch and per arrow key press.
    pub line_height: f32,
    /// Fraction of the viewport moved by PageUp/PageDown/Space.
    pub page_fraction: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { line_height: 40.0, page_fraction: 0.9 }
    }
}

impl ScrollConfig {
    pub fn with_line_height(mut self, px: f32) -> Self {
        self.line_height = px;
        self
    }
}

/// Vertical scroll position of a document inside a viewport.
///
/// The offset is always within `[0, max_offset()]`. Every mutator returns
/// whether the offset actually changed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    content_height: f32,
    viewport_height: f32,
}

impl ScrollState {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            offset: 0.0,
            content_height: finite_or_zero(content_height),
            viewport_height: finite_or_zero(viewport_height),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Updates the extents, re-clamping the offset.
    pub fn set_extent(&mut self, content_height: f32, viewport_height: f32) -> bool {
        self.content_height = finite_or_zero(content_height);
        self.viewport_height = finite_or_zero(viewport_height);
        self.scroll_to(self.offset)
    }

    pub fn scroll_to(&mut self, offset: f32) -> bool {
        if offset.is_nan() {
            return false;
        }
        let prev = self.offset;
        self.offset = offset.clamp(0.0, self.max_offset());
        self.offset != prev
    }

    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.scroll_to(self.offset + delta)
    }

    pub fn apply_wheel(&mut self, delta: MouseWheelDelta, config: &ScrollConfig) -> bool {
        match delta {
            MouseWheelDelta::Line { y } => self.scroll_by(y * config.line_height),
            MouseWheelDelta::Pixel { y } => self.scroll_by(y),
        }
    }

    /// Keyboard navigation. Shift+Space pages up.
    pub fn apply_key(&mut self, key: Key, modifiers: Modifiers, config: &ScrollConfig) -> bool {
        let page = self.viewport_height * config.page_fraction;
        match key {
            Key::ArrowDown => self.scroll_by(config.line_height),
            Key::ArrowUp => self.scroll_by(-config.line_height),
            Key::PageDown => self.scroll_by(page),
            Key::PageUp => self.scroll_by(-page),
            Key::Space if modifiers.shift => self.scroll_by(-page),
            Key::Space => self.scroll_by(page),
            Key::Home => self.scroll_to(0.0),
            Key::End => self.scroll_to(f32::INFINITY),
            _ => false,
        }
    }

    /// Applies a frame's wheel and key input in arrival order.
    pub fn apply_input(&mut self, input: &InputFrame, config: &ScrollConfig) -> bool {
        let mut changed = false;
        for &delta in &input.wheel {
            changed |= self.apply_wheel(delta, config);
        }
        for &key in &input.keys_pressed {
            changed |= self.apply_key(key, input.modifiers, config);
        }
        changed
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
