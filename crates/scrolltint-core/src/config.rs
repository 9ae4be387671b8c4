use crate::error::ConfigError;
use crate::host::{
    COLOR_POINT_ATTR, COLOR_POINT_CLASSNAME_ATTR, MarkedElement, ScrollSurface, document_offset,
};
use crate::parse::parse_color_point;
use crate::point::ColorPoint;

/// What to do with a marked element whose color is missing or malformed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InvalidPointPolicy {
    /// Fail the whole configuration.
    #[default]
    Abort,
    /// Drop the point with a warning and keep the rest.
    Skip,
}

/// What to do when offsets are not ascending in supply order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OrderPolicy {
    /// Stable-sort points by offset.
    #[default]
    Sort,
    /// Fail with [`ConfigError::Unsorted`].
    Reject,
}

/// Validation choices applied when building a [`BlendConfig`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BlendOptions {
    pub invalid: InvalidPointPolicy,
    pub order: OrderPolicy,
}

/// Immutable, validated set of color points in ascending offset order.
///
/// Always holds at least two points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendConfig {
    points: Vec<ColorPoint>,
}

impl BlendConfig {
    /// Validates `points` and orders them per `order`.
    pub fn new(mut points: Vec<ColorPoint>, order: OrderPolicy) -> Result<Self, ConfigError> {
        if points.len() < 2 {
            return Err(ConfigError::TooFewPoints { found: points.len() });
        }

        match order {
            OrderPolicy::Sort => points.sort_by_key(|p| p.offset),
            OrderPolicy::Reject => {
                if let Some(i) = points.windows(2).position(|w| w[1].offset < w[0].offset) {
                    return Err(ConfigError::Unsorted {
                        index: i + 1,
                        offset: points[i + 1].offset,
                        previous: points[i].offset,
                    });
                }
            }
        }

        Ok(Self { points })
    }

    /// Reads color points from marked elements in the order given.
    ///
    /// Element tops are viewport-relative; the surface's scroll position and
    /// client top turn them into document offsets.
    pub fn scan<I>(
        elements: I,
        surface: &dyn ScrollSurface,
        options: BlendOptions,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: MarkedElement,
    {
        let elements: Vec<I::Item> = elements.into_iter().collect();
        if options.invalid == InvalidPointPolicy::Abort && elements.len() < 2 {
            return Err(ConfigError::TooFewPoints { found: elements.len() });
        }

        let scroll_top = surface.scroll_top();
        let client_top = surface.client_top();

        let mut points = Vec::with_capacity(elements.len());
        for (index, el) in elements.iter().enumerate() {
            match read_point(index, el, scroll_top, client_top) {
                Ok(point) => points.push(point),
                Err(e) if options.invalid == InvalidPointPolicy::Skip => {
                    log::warn!("skipping color point: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        let config = Self::new(points, options.order)?;
        log::debug!(
            "color points: {} configured across offsets {}..={}",
            config.points.len(),
            config.first().offset,
            config.last().offset,
        );
        Ok(config)
    }

    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }

    pub fn first(&self) -> &ColorPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &ColorPoint {
        &self.points[self.points.len() - 1]
    }
}

fn read_point<E: MarkedElement>(
    index: usize,
    el: &E,
    scroll_top: f64,
    client_top: f64,
) -> Result<ColorPoint, ConfigError> {
    let raw = el
        .attribute(COLOR_POINT_ATTR)
        .ok_or(ConfigError::MissingColor { index })?;
    let color = parse_color_point(raw).map_err(|source| ConfigError::InvalidColor {
        index,
        value: raw.to_string(),
        source,
    })?;

    Ok(ColorPoint {
        offset: document_offset(el.bounding_top(), scroll_top, client_top),
        color,
        class_name: el.attribute(COLOR_POINT_CLASSNAME_ATTR).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb::Rgb;
    use crate::testing::{FakeElement, FakeSurface};

    fn strict() -> BlendOptions {
        BlendOptions::default()
    }

    fn lenient() -> BlendOptions {
        BlendOptions { invalid: InvalidPointPolicy::Skip, ..BlendOptions::default() }
    }

    #[test]
    fn scan_reads_offsets_colors_and_class_names() {
        let surface = FakeSurface::scrolled_to(100.0);
        let els = [
            FakeElement::new(-100.0, "255,0,0").class("red"),
            FakeElement::new(50.0, "0, 0, 255"),
        ];
        let cfg = BlendConfig::scan(&els, &surface, strict()).unwrap();
        assert_eq!(
            cfg.points(),
            &[
                ColorPoint::new(0, Rgb::new(255, 0, 0)).with_class_name("red"),
                ColorPoint::new(150, Rgb::new(0, 0, 255)),
            ]
        );
    }

    #[test]
    fn scan_subtracts_client_top() {
        let mut surface = FakeSurface::scrolled_to(0.0);
        surface.client_top = 4.0;
        let els = [FakeElement::new(10.0, "0,0,0"), FakeElement::new(20.0, "0,0,0")];
        let cfg = BlendConfig::scan(&els, &surface, strict()).unwrap();
        assert_eq!(cfg.first().offset, 6);
        assert_eq!(cfg.last().offset, 16);
    }

    #[test]
    fn one_point_is_too_few() {
        let els = [FakeElement::new(0.0, "1,2,3")];
        let err = BlendConfig::scan(&els, &FakeSurface::default(), strict()).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPoints { found: 1 });
    }

    #[test]
    fn too_few_is_reported_before_bad_colors() {
        let els = [FakeElement::new(0.0, "nope")];
        let err = BlendConfig::scan(&els, &FakeSurface::default(), strict()).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPoints { found: 1 });
    }

    #[test]
    fn one_bad_color_aborts_everything() {
        let els = [
            FakeElement::new(0.0, "255,0,0"),
            FakeElement::new(100.0, "999,0,0"),
            FakeElement::new(200.0, "0,0,255"),
        ];
        let err = BlendConfig::scan(&els, &FakeSurface::default(), strict()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { index: 1, .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_color_aborts() {
        let els = [FakeElement::new(0.0, "255,0,0"), FakeElement::without_color(100.0)];
        let err = BlendConfig::scan(&els, &FakeSurface::default(), strict()).unwrap_err();
        assert_eq!(err, ConfigError::MissingColor { index: 1 });
    }

    #[test]
    fn skip_policy_drops_bad_points() {
        let els = [
            FakeElement::new(0.0, "255,0,0"),
            FakeElement::new(100.0, "a,b,c"),
            FakeElement::new(200.0, "0,0,255"),
        ];
        let cfg = BlendConfig::scan(&els, &FakeSurface::default(), lenient()).unwrap();
        let offsets: Vec<i64> = cfg.points().iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![0, 200]);
    }

    #[test]
    fn skip_policy_still_needs_two_good_points() {
        let els = [FakeElement::new(0.0, "255,0,0"), FakeElement::new(100.0, "a,b,c")];
        let err = BlendConfig::scan(&els, &FakeSurface::default(), lenient()).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPoints { found: 1 });
    }

    #[test]
    fn sort_policy_orders_by_offset_stably() {
        let cfg = BlendConfig::new(
            vec![
                ColorPoint::new(300, Rgb::new(3, 3, 3)),
                ColorPoint::new(100, Rgb::new(1, 1, 1)),
                ColorPoint::new(300, Rgb::new(4, 4, 4)),
            ],
            OrderPolicy::Sort,
        )
        .unwrap();
        let colors: Vec<u8> = cfg.points().iter().map(|p| p.color.r).collect();
        assert_eq!(colors, vec![1, 3, 4]);
    }

    #[test]
    fn reject_policy_names_the_offending_point() {
        let err = BlendConfig::new(
            vec![
                ColorPoint::new(0, Rgb::default()),
                ColorPoint::new(500, Rgb::default()),
                ColorPoint::new(200, Rgb::default()),
            ],
            OrderPolicy::Reject,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::Unsorted { index: 2, offset: 200, previous: 500 });
    }

    #[test]
    fn reject_policy_accepts_equal_offsets() {
        let points = vec![ColorPoint::new(10, Rgb::default()), ColorPoint::new(10, Rgb::default())];
        assert!(BlendConfig::new(points, OrderPolicy::Reject).is_ok());
    }
}
