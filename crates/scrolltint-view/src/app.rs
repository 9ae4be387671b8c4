use anyhow::{Context, Result};

use scrolltint_core::{BlendOptions, COLOR_POINT_ATTR, Rgb, parse_color_point};
use scrolltint_engine::coords::{Rect, Viewport};
use scrolltint_engine::core::{App as EngineApp, AppControl, FrameCtx, WindowCtx};
use scrolltint_engine::device::GpuInit;
use scrolltint_engine::input::{InputFrame, Key};
use scrolltint_engine::paint::Color;
use scrolltint_engine::render::{FillRect, RectRenderer};
use scrolltint_engine::window::{Runtime, RuntimeConfig};
use scrolltint_page::{PageDocument, PageLayout, parse_str};

use crate::host::PageHost;
use crate::scroll::{ScrollConfig, ScrollState};

/// Background used when the page root does not name one.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(18, 18, 23);

// ── Application ───────────────────────────────────────────────────────────

/// Viewer builder: configure the window and blend behavior, then [`run`] a
/// page source.
///
/// ```rust,ignore
/// Application::new()
///     .title("Sunset")
///     .size(960.0, 720.0)
///     .run(include_str!("pages/sunset.tint"))?;
/// ```
///
/// [`run`]: Application::run
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    options: BlendOptions,
    scroll: ScrollConfig,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "scrolltint".to_string(),
            width: 960.0,
            height: 720.0,
            options: BlendOptions::default(),
            scroll: ScrollConfig::default(),
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn blend_options(mut self, options: BlendOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scroll_config(mut self, config: ScrollConfig) -> Self {
        self.scroll = config;
        self
    }

    /// Parses `src` and runs the viewer until its window closes.
    pub fn run(self, src: &str) -> Result<()> {
        let doc = parse_str(src).context("failed to parse page")?;
        let view = PageView::new(&doc, self.title.clone(), self.options, self.scroll);

        let config = RuntimeConfig::default()
            .with_title(self.title.clone())
            .with_size(self.width, self.height);

        let app = ViewerApp {
            view,
            rects: RectRenderer::new(),
            shown_title: self.title,
        };
        Runtime::run(config, GpuInit::default(), app).context("viewer runtime failed")
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── PageView ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
struct PageFill {
    top: f32,
    height: f32,
    inset: f32,
    color: Color,
}

/// Everything the viewer knows about a loaded page, independent of the
/// window it is shown in.
pub struct PageView {
    title: String,
    host: PageHost,
    fills: Vec<PageFill>,
    document_height: f32,
    scroll_config: ScrollConfig,
}

impl PageView {
    /// Lays out `doc` and installs the color blend.
    ///
    /// A page whose color points cannot be configured still displays; it
    /// just keeps its initial background.
    pub fn new(
        doc: &PageDocument,
        title: String,
        options: BlendOptions,
        scroll_config: ScrollConfig,
    ) -> Self {
        let layout = PageLayout::compute(doc);
        let document_height = layout.document_height();

        let fills = layout
            .boxes()
            .iter()
            .filter_map(|b| {
                let [r, g, bl, a] = b.element.attr_color("fill")?;
                Some(PageFill {
                    top: b.top,
                    height: b.height,
                    inset: b.inset,
                    color: Color::from_srgb8(r, g, bl, a),
                })
            })
            .collect();

        let scroll = ScrollState::new(document_height, 0.0);
        let mut host = PageHost::new(scroll, initial_background(doc));

        if let Err(e) = host.install_color_blend(layout.with_attr(COLOR_POINT_ATTR), options) {
            log::warn!("color blend disabled: {e}");
        }

        Self { title, host, fills, document_height, scroll_config }
    }

    pub fn host(&self) -> &PageHost {
        &self.host
    }

    /// Tracks the viewport height; shrinking the viewport may move the
    /// offset and so count as a scroll.
    pub fn resize(&mut self, viewport_height: f32) -> bool {
        let content = self.document_height;
        self.host.scroll_with(|s| s.set_extent(content, viewport_height))
    }

    pub fn handle_input(&mut self, input: &InputFrame) -> bool {
        if !input.has_activity() {
            return false;
        }
        let config = self.scroll_config;
        self.host.scroll_with(|s| s.apply_input(input, &config))
    }

    /// Window title, suffixed with the active color point's class name.
    pub fn window_title(&self) -> String {
        match self.host.active_class() {
            Some(class) => format!("{} · {class}", self.title),
            None => self.title.clone(),
        }
    }

    pub fn clear_color(&self) -> Color {
        let bg = self.host.background();
        Color::opaque_srgb8(bg.r, bg.g, bg.b)
    }

    /// Fill rectangles intersecting `viewport` at the current scroll offset.
    pub fn visible_fills(&self, viewport: Viewport) -> Vec<FillRect> {
        let offset = self.host.scroll().offset();
        let screen = viewport.rect();
        self.fills
            .iter()
            .map(|f| FillRect {
                rect: Rect::new(0.0, f.top, viewport.width, f.height)
                    .translated(0.0, -offset)
                    .inset_x(f.inset),
                color: f.color,
            })
            .filter(|f| f.rect.intersect(screen).is_some())
            .collect()
    }
}

fn initial_background(doc: &PageDocument) -> Rgb {
    if let Some([r, g, b, _]) = doc.root.attr_color("background") {
        return Rgb::new(r, g, b);
    }
    match doc.root.attr_str("background").map(parse_color_point) {
        Some(Ok(rgb)) => rgb,
        Some(Err(e)) => {
            log::warn!("ignoring page background: {e}");
            DEFAULT_BACKGROUND
        }
        None => DEFAULT_BACKGROUND,
    }
}

// ── ViewerApp ─────────────────────────────────────────────────────────────

struct ViewerApp {
    view: PageView,
    rects: RectRenderer,
    shown_title: String,
}

impl EngineApp for ViewerApp {
    fn on_start(&mut self, window: &WindowCtx<'_>) {
        let (w, h) = window.logical_size();
        self.view.resize(h);
        log::debug!("viewport {w}x{h}, scroll range 0..={}", self.view.host().scroll().max_offset());
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        let (w, h) = ctx.window.logical_size();
        self.view.resize(h);
        self.view.handle_input(ctx.input);

        let title = self.view.window_title();
        if title != self.shown_title {
            ctx.window.set_title(&title);
            self.shown_title = title;
        }

        let fills = self.view.visible_fills(Viewport::new(w, h));
        let rects = &mut self.rects;
        ctx.render(self.view.clear_color(), |rctx, target| {
            rects.render(rctx, target, &fills);
        })
    }
}
