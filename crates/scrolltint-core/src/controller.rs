use crate::blend::blend;
use crate::config::{BlendConfig, BlendOptions};
use crate::error::ConfigError;
use crate::host::{MarkedElement, ScrollListener, ScrollSurface};
use crate::rgb::Rgb;

/// Where a scroll offset falls relative to the configured points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Span {
    /// At or above the first point.
    BeforeFirst,
    /// At or below the last point.
    AfterLast,
    /// Inside `[points[lower].offset, points[upper].offset)`, `upper == lower + 1`.
    Between { lower: usize, upper: usize, t: f64 },
}

/// The result of evaluating the controller at one scroll offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample<'a> {
    pub color: Rgb,
    pub span: Span,
    /// Class name of the active point: the lower bracket point, or the
    /// endpoint when outside the configured range.
    pub class_name: Option<&'a str>,
}

/// Drives a surface's background from its scroll position.
///
/// Owns an immutable [`BlendConfig`]; independent controllers never share
/// state, so several pages (or several tests) can each hold one.
#[derive(Debug, Clone)]
pub struct ColorBlendController {
    config: BlendConfig,
}

impl ColorBlendController {
    pub fn new(config: BlendConfig) -> Self {
        Self { config }
    }

    /// Scans marked elements against `surface` and builds a controller.
    ///
    /// The caller decides what an error means; hosts that mirror the classic
    /// page script simply stay inert and never register a listener.
    pub fn install<I>(
        elements: I,
        surface: &dyn ScrollSurface,
        options: BlendOptions,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: MarkedElement,
    {
        BlendConfig::scan(elements, surface, options).map(Self::new)
    }

    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Evaluates the blend at `scroll_top` without touching any surface.
    pub fn sample(&self, scroll_top: f64) -> Sample<'_> {
        let points = self.config.points();
        let first = self.config.first();
        let last = self.config.last();

        if scroll_top.is_nan() || scroll_top <= first.offset as f64 {
            return Sample {
                color: first.color,
                span: Span::BeforeFirst,
                class_name: first.class_name.as_deref(),
            };
        }
        if scroll_top >= last.offset as f64 {
            return Sample {
                color: last.color,
                span: Span::AfterLast,
                class_name: last.class_name.as_deref(),
            };
        }

        // first < scroll_top < last, so 1 <= upper <= len - 1 and the upper
        // offset is strictly greater than the lower one.
        let upper = points.partition_point(|p| p.offset as f64 <= scroll_top);
        let lower = upper - 1;
        let (a, b) = (&points[lower], &points[upper]);
        let t = (scroll_top - a.offset as f64) / (b.offset - a.offset) as f64;

        Sample {
            color: blend(a.color, b.color, t),
            span: Span::Between { lower, upper, t },
            class_name: a.class_name.as_deref(),
        }
    }

    pub fn color_at(&self, scroll_top: f64) -> Rgb {
        self.sample(scroll_top).color
    }

    /// Recomputes the background for the surface's current scroll position
    /// and writes it.
    pub fn update(&self, surface: &mut dyn ScrollSurface) {
        let sample = self.sample(surface.scroll_top());
        log::trace!("scroll {} -> {}", surface.scroll_top(), sample.color);
        surface.set_background(sample.color);
        surface.set_active_class(sample.class_name);
    }
}

impl ScrollListener for ColorBlendController {
    fn on_scroll(&mut self, surface: &mut dyn ScrollSurface) {
        self.update(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderPolicy;
    use crate::point::ColorPoint;
    use crate::testing::{FakeElement, FakeSurface};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn controller(points: Vec<ColorPoint>) -> ColorBlendController {
        ColorBlendController::new(BlendConfig::new(points, OrderPolicy::Sort).unwrap())
    }

    fn red_to_blue() -> ColorBlendController {
        controller(vec![ColorPoint::new(0, RED), ColorPoint::new(100, BLUE)])
    }

    fn three_stops() -> ColorBlendController {
        controller(vec![
            ColorPoint::new(100, RED).with_class_name("red"),
            ColorPoint::new(300, GREEN).with_class_name("green"),
            ColorPoint::new(700, BLUE),
        ])
    }

    #[test]
    fn midpoint_matches_worked_example() {
        assert_eq!(red_to_blue().color_at(50.0).to_string(), "rgb(128,0,128)");
    }

    #[test]
    fn ends_are_solid() {
        let c = red_to_blue();
        assert_eq!(c.color_at(0.0).to_string(), "rgb(255,0,0)");
        assert_eq!(c.color_at(200.0).to_string(), "rgb(0,0,255)");
        assert_eq!(c.color_at(-40.0), RED);
    }

    #[test]
    fn before_and_after_report_their_span() {
        let c = three_stops();
        assert_eq!(c.sample(100.0).span, Span::BeforeFirst);
        assert_eq!(c.sample(700.0).span, Span::AfterLast);
        assert_eq!(c.sample(10_000.0).color, BLUE);
    }

    #[test]
    fn interior_point_offset_yields_its_exact_color() {
        let c = three_stops();
        let s = c.sample(300.0);
        assert_eq!(s.color, GREEN);
        assert_eq!(s.span, Span::Between { lower: 1, upper: 2, t: 0.0 });
    }

    #[test]
    fn picks_the_bracketing_pair() {
        let c = three_stops();
        assert_eq!(c.sample(200.0).span, Span::Between { lower: 0, upper: 1, t: 0.5 });
        assert_eq!(c.sample(500.0).span, Span::Between { lower: 1, upper: 2, t: 0.5 });
        assert_eq!(c.color_at(500.0), Rgb::new(0, 128, 128));
    }

    #[test]
    fn fractional_scroll_offsets_interpolate() {
        let c = red_to_blue();
        let s = c.sample(25.5);
        assert_eq!(s.span, Span::Between { lower: 0, upper: 1, t: 0.255 });
        // 255 - 255 * 0.255 = 189.975 ; 255 * 0.255 = 65.025
        assert_eq!(s.color, Rgb::new(190, 0, 65));
    }

    #[test]
    fn channels_are_monotonic_between_points() {
        let c = three_stops();
        let mut prev = c.color_at(300.0);
        for scroll in 301..700 {
            let cur = c.color_at(f64::from(scroll));
            assert!(cur.g <= prev.g && cur.b >= prev.b && cur.r == 0);
            prev = cur;
        }
    }

    #[test]
    fn duplicate_offsets_never_divide_by_zero() {
        let c = controller(vec![
            ColorPoint::new(0, RED),
            ColorPoint::new(100, GREEN),
            ColorPoint::new(100, BLUE),
            ColorPoint::new(200, RED),
        ]);
        let s = c.sample(100.0);
        assert_eq!(s.span, Span::Between { lower: 2, upper: 3, t: 0.0 });
        assert_eq!(s.color, BLUE);
        assert_eq!(c.sample(99.0).span, Span::Between { lower: 0, upper: 1, t: 0.99 });
    }

    #[test]
    fn unsorted_input_behaves_like_sorted_input() {
        let sorted = three_stops();
        let shuffled = controller(vec![
            ColorPoint::new(700, BLUE),
            ColorPoint::new(100, RED).with_class_name("red"),
            ColorPoint::new(300, GREEN).with_class_name("green"),
        ]);
        for scroll in (0..800).step_by(7) {
            let scroll = f64::from(scroll);
            assert_eq!(sorted.sample(scroll), shuffled.sample(scroll));
        }
    }

    #[test]
    fn nan_scroll_is_treated_as_top() {
        assert_eq!(three_stops().sample(f64::NAN).color, RED);
    }

    #[test]
    fn class_name_follows_the_lower_point() {
        let c = three_stops();
        assert_eq!(c.sample(0.0).class_name, Some("red"));
        assert_eq!(c.sample(299.0).class_name, Some("red"));
        assert_eq!(c.sample(300.0).class_name, Some("green"));
        assert_eq!(c.sample(900.0).class_name, None);
    }

    #[test]
    fn update_writes_background_and_class() {
        let c = three_stops();
        let mut surface = FakeSurface::scrolled_to(200.0);
        c.update(&mut surface);
        assert_eq!(surface.background, Some(Rgb::new(128, 128, 0)));
        assert_eq!(surface.active_class.as_deref(), Some("red"));
        assert_eq!(surface.writes, 1);
    }

    #[test]
    fn install_from_elements_then_listen() {
        let mut surface = FakeSurface::scrolled_to(0.0);
        let els = [FakeElement::new(0.0, "255,0,0"), FakeElement::new(100.0, "0,0,255")];
        let mut c = ColorBlendController::install(&els, &surface, BlendOptions::default()).unwrap();

        surface.scroll_top = 50.0;
        c.on_scroll(&mut surface);
        assert_eq!(surface.background.map(|b| b.to_string()).as_deref(), Some("rgb(128,0,128)"));
    }

    #[test]
    fn install_fails_on_malformed_color() {
        let surface = FakeSurface::default();
        let els = [FakeElement::new(0.0, "255,0,0"), FakeElement::new(100.0, "999,0,0")];
        assert!(ColorBlendController::install(&els, &surface, BlendOptions::default()).is_err());
    }
}
