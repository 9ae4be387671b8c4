//! Vertical block layout.
//!
//! Every element is a full-width block. Its height is the `height`
//! attribute when present, otherwise the stacked height of its children plus
//! `padding` above and below and `gap` between siblings. Children are inset
//! horizontally by the parent's padding.
//!
//! Positions are document space: `top` is measured from the top of the page,
//! before any scrolling.

use crate::ast::{Element, PageDocument};

/// Layout result for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox<'a> {
    pub element: &'a Element,
    /// Distance from the document top to the element's top edge.
    pub top: f32,
    pub height: f32,
    /// Horizontal inset on both sides, accumulated from ancestors' padding.
    pub inset: f32,
}

/// Boxes for every element of a page, in document (pre-) order.
#[derive(Debug, Clone)]
pub struct PageLayout<'a> {
    boxes: Vec<LayoutBox<'a>>,
}

impl<'a> PageLayout<'a> {
    pub fn compute(doc: &'a PageDocument) -> Self {
        let mut boxes = Vec::new();
        place(&doc.root, 0.0, 0.0, &mut boxes);
        Self { boxes }
    }

    /// Total scrollable height of the document.
    pub fn document_height(&self) -> f32 {
        self.boxes.first().map_or(0.0, |b| b.height)
    }

    pub fn boxes(&self) -> &[LayoutBox<'a>] {
        &self.boxes
    }

    /// Boxes whose element carries attribute `key`, in document order.
    pub fn with_attr<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s LayoutBox<'a>> + 's {
        self.boxes.iter().filter(move |b| b.element.attr(key).is_some())
    }
}

fn non_negative(v: Option<f32>) -> f32 {
    v.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

fn measure(el: &Element) -> f32 {
    if let Some(h) = el.attr_f32("height") {
        return non_negative(Some(h));
    }
    let padding = non_negative(el.attr_f32("padding"));
    let gap = non_negative(el.attr_f32("gap"));
    let children: f32 = el.children.iter().map(measure).sum();
    let gaps = gap * el.children.len().saturating_sub(1) as f32;
    padding * 2.0 + children + gaps
}

fn place<'a>(el: &'a Element, top: f32, inset: f32, out: &mut Vec<LayoutBox<'a>>) {
    out.push(LayoutBox { element: el, top, height: measure(el), inset });

    let padding = non_negative(el.attr_f32("padding"));
    let gap = non_negative(el.attr_f32("gap"));
    let mut y = top + padding;
    for child in &el.children {
        place(child, y, inset + padding, out);
        y += measure(child) + gap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    #[test]
    fn explicit_heights_stack_in_order() {
        let doc = parse_str("Page { Section { height: 100 } Section { height: 250 } }").unwrap();
        let layout = PageLayout::compute(&doc);
        let tops: Vec<f32> = layout.boxes().iter().map(|b| b.top).collect();
        assert_eq!(tops, vec![0.0, 0.0, 100.0]);
        assert_eq!(layout.document_height(), 350.0);
    }

    #[test]
    fn padding_and_gap_shift_children() {
        let doc = parse_str(
            "Page { padding: 10 gap: 5 Section { height: 20 } Section { height: 30 } }",
        )
        .unwrap();
        let layout = PageLayout::compute(&doc);
        let b = layout.boxes();
        assert_eq!(b[1].top, 10.0);
        assert_eq!(b[1].inset, 10.0);
        assert_eq!(b[2].top, 35.0);
        assert_eq!(layout.document_height(), 10.0 + 20.0 + 5.0 + 30.0 + 10.0);
    }

    #[test]
    fn explicit_height_wins_over_children() {
        let doc = parse_str("Page { height: 40 Section { height: 400 } }").unwrap();
        assert_eq!(PageLayout::compute(&doc).document_height(), 40.0);
    }

    #[test]
    fn negative_height_is_treated_as_zero() {
        let doc = parse_str("Page { Section { height: -50 } Section { height: 10 } }").unwrap();
        let layout = PageLayout::compute(&doc);
        assert_eq!(layout.boxes()[2].top, 0.0);
        assert_eq!(layout.document_height(), 10.0);
    }

    #[test]
    fn nested_elements_are_preorder() {
        let doc = parse_str(
            "Page { Group { padding: 4 Section { height: 8 } } Section { height: 2 } }",
        )
        .unwrap();
        let layout = PageLayout::compute(&doc);
        let tags: Vec<&str> = layout.boxes().iter().map(|b| b.element.tag.as_str()).collect();
        assert_eq!(tags, vec!["Page", "Group", "Section", "Section"]);
        assert_eq!(layout.boxes()[2].inset, 4.0);
        assert_eq!(layout.boxes()[2].top, 4.0);
        assert_eq!(layout.boxes()[3].top, 16.0);
    }
}
