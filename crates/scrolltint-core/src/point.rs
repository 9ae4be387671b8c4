use crate::rgb::Rgb;

/// A calibration entry pairing a document offset with a target color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPoint {
    /// Pixels from the document top.
    pub offset: i64,
    pub color: Rgb,
    /// Consumer styling hook; never used by the color math.
    pub class_name: Option<String>,
}

impl ColorPoint {
    pub fn new(offset: i64, color: Rgb) -> Self {
        Self { offset, color, class_name: None }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}
