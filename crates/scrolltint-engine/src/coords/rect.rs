/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    #[inline]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Shrinks horizontally by `inset` on both sides; width never goes negative.
    #[inline]
    pub fn inset_x(self, inset: f32) -> Self {
        Self::new(self.x + inset, self.y, (self.w - inset * 2.0).max(0.0), self.h)
    }

    /// Overlap of two rects, or `None` when they only touch or are disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn translate_moves_origin_only() {
        assert_eq!(r(10.0, 20.0, 5.0, 6.0).translated(-10.0, -25.0), r(0.0, -5.0, 5.0, 6.0));
    }

    #[test]
    fn inset_shrinks_both_sides() {
        assert_eq!(r(0.0, 0.0, 100.0, 10.0).inset_x(10.0), r(10.0, 0.0, 80.0, 10.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).inset_x(20.0).w, 0.0);
    }

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_partially_scrolled_off() {
        let viewport = r(0.0, 0.0, 800.0, 600.0);
        let block = r(0.0, -200.0, 800.0, 300.0);
        assert_eq!(viewport.intersect(block), Some(r(0.0, 0.0, 800.0, 100.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
