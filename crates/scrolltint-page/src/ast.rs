// ── Value ─────────────────────────────────────────────────────────────────

/// A literal attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"255, 0, 0"`
    Str(String),
    /// Numeric literal: `720` or `12.5`
    Number(f32),
    /// Color literal, straight-alpha RGBA bytes.
    Color([u8; 4]),
    /// Bare identifier: `dawn`
    Ident(String),
}

impl Value {
    /// Short human name of the value kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Attr ──────────────────────────────────────────────────────────────────

/// A single `key: value` attribute inside an element block.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
    /// 1-based position of the key.
    pub line: usize,
    pub col: usize,
}

// ── Element ───────────────────────────────────────────────────────────────

/// An element in the page tree.
///
/// ```tint
/// Section "Dawn" {
///     height: 720
///     data-color-point: "255, 94, 58"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Optional inline label: `Section "Dawn"`.
    pub label: Option<String>,
    pub attrs: Vec<Attr>,
    pub children: Vec<Element>,
    /// 1-based position of the tag name.
    pub line: usize,
    pub col: usize,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.key == key)
    }

    pub fn attr_value(&self, key: &str) -> Option<&Value> {
        self.attr(key).map(|a| &a.value)
    }

    /// Attribute as text if it is a `Str` or `Ident`.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        match self.attr_value(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn attr_f32(&self, key: &str) -> Option<f32> {
        match self.attr_value(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn attr_color(&self, key: &str) -> Option<[u8; 4]> {
        match self.attr_value(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Iterates this element and all descendants in pre-order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order iterator over an element subtree. See [`Element::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let el = self.stack.pop()?;
        self.stack.extend(el.children.iter().rev());
        Some(el)
    }
}

// ── PageDocument ──────────────────────────────────────────────────────────

/// The top-level parse result for a `.tint` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub root: Element,
}

impl PageDocument {
    /// Elements carrying attribute `key`, in document order (root included).
    pub fn select_with_attr(&self, key: &str) -> Vec<&Element> {
        self.root.walk().filter(|el| el.attr(key).is_some()).collect()
    }
}
