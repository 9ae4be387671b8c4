//! Every element and attribute the viewer understands. Drives hover and
//! completion.

use scrolltint_core::{COLOR_POINT_ATTR, COLOR_POINT_CLASSNAME_ATTR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// Numeric literal in logical pixels.
    Length,
    /// `#rrggbb` or `#rrggbbaa`.
    Color,
    /// Quoted `"R,G,B"` string.
    ColorPoint,
    /// String or bare identifier.
    Name,
}

impl AttrKind {
    pub fn describe(self) -> &'static str {
        match self {
            AttrKind::Length => "number (logical px)",
            AttrKind::Color => "color (`#rrggbb` or `#rrggbbaa`)",
            AttrKind::ColorPoint => "string `\"R,G,B\"`",
            AttrKind::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AttrInfo {
    pub name: &'static str,
    pub kind: AttrKind,
    pub doc: &'static str,
}

pub struct ElementInfo {
    pub name: &'static str,
    pub doc: &'static str,
    pub attrs: &'static [AttrInfo],
}

const COLOR_POINT: AttrInfo = AttrInfo {
    name: COLOR_POINT_ATTR,
    kind: AttrKind::ColorPoint,
    doc: "Makes this block a color point. When the page is scrolled so that the \
          block's top edge reaches the top of the window, the background is exactly \
          this color; between points it blends linearly.\n\nEach component is 0-255, \
          e.g. `\"255, 94, 58\"`.",
};

const COLOR_POINT_CLASSNAME: AttrInfo = AttrInfo {
    name: COLOR_POINT_CLASSNAME_ATTR,
    kind: AttrKind::Name,
    doc: "Class name published while this color point is the active one. Shown in the window title.",
};

const BLOCK_ATTRS: &[AttrInfo] = &[
    AttrInfo {
        name: "height",
        kind: AttrKind::Length,
        doc: "Fixed block height. Without it the block is as tall as its children plus padding and gaps.",
    },
    AttrInfo {
        name: "padding",
        kind: AttrKind::Length,
        doc: "Space above and below the children; children are also inset by this much horizontally.",
    },
    AttrInfo { name: "gap", kind: AttrKind::Length, doc: "Vertical space between children." },
    AttrInfo { name: "fill", kind: AttrKind::Color, doc: "Solid color painted over the block's area." },
    COLOR_POINT,
    COLOR_POINT_CLASSNAME,
];

const PAGE_ATTRS: &[AttrInfo] = &[
    AttrInfo {
        name: "background",
        kind: AttrKind::Color,
        doc: "Background shown before the first scroll, or always if the color points are invalid.",
    },
    AttrInfo { name: "padding", kind: AttrKind::Length, doc: "Space around the page content." },
    AttrInfo { name: "gap", kind: AttrKind::Length, doc: "Vertical space between top-level blocks." },
    AttrInfo { name: "fill", kind: AttrKind::Color, doc: "Solid color painted over the whole page." },
    // The root sits at offset 0, so a point here pins the top of the page.
    COLOR_POINT,
    COLOR_POINT_CLASSNAME,
];

pub static ELEMENTS: &[ElementInfo] = &[
    ElementInfo {
        name: "Page",
        doc: "The document root. Exactly one per file.",
        attrs: PAGE_ATTRS,
    },
    ElementInfo {
        name: "Section",
        doc: "A full-width block. The usual carrier of color points.\n\nAn optional inline label names it: `Section \"Dawn\" { }`.",
        attrs: BLOCK_ATTRS,
    },
    ElementInfo {
        name: "Group",
        doc: "A block that stacks its children, for shared padding and gaps.",
        attrs: BLOCK_ATTRS,
    },
];

pub fn element_by_name(name: &str) -> Option<&'static ElementInfo> {
    ELEMENTS.iter().find(|e| e.name == name)
}

/// Attributes accepted by `element`. Unknown elements accept the block
/// attributes.
pub fn attrs_for(element: &str) -> &'static [AttrInfo] {
    element_by_name(element).map_or(BLOCK_ATTRS, |e| e.attrs)
}

pub fn attr_in_element(element: &str, attr: &str) -> Option<&'static AttrInfo> {
    attrs_for(element).iter().find(|a| a.name == attr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_point_is_known_on_sections() {
        let a = attr_in_element("Section", "data-color-point").unwrap();
        assert_eq!(a.kind, AttrKind::ColorPoint);
    }

    #[test]
    fn page_accepts_background_and_color_point() {
        assert!(attr_in_element("Page", "background").is_some());
        let a = attr_in_element("Page", "data-color-point").unwrap();
        assert_eq!(a.kind, AttrKind::ColorPoint);
        assert!(attr_in_element("Page", "data-color-point-classname").is_some());
    }

    #[test]
    fn unknown_elements_fall_back_to_block_attrs() {
        assert!(attr_in_element("Banner", "height").is_some());
    }
}
