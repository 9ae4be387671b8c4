use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::parse::parse_color_point;

/// An opaque 8-bit-per-channel sRGB color.
///
/// `Display` renders the CSS functional form written to a page background,
/// without spaces: `rgb(255,0,128)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Parses the `data-color-point` form `"R,G,B"`.
impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_point(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_no_spaces() {
        assert_eq!(Rgb::new(128, 0, 128).to_string(), "rgb(128,0,128)");
    }

    #[test]
    fn from_str_uses_color_point_syntax() {
        assert_eq!(" 1, 2 ,3".parse::<Rgb>(), Ok(Rgb::new(1, 2, 3)));
        assert!("#010203".parse::<Rgb>().is_err());
    }
}
