use crate::error::ColorParseError;
use crate::rgb::Rgb;

/// Parses a color point value: three decimal integers of 1 to 3 digits,
/// separated by commas, each in `0..=255`. Whitespace is allowed around every
/// component.
///
/// ```
/// use scrolltint_core::{parse_color_point, Rgb};
///
/// assert_eq!(parse_color_point(" 255 , 94,58 "), Ok(Rgb::new(255, 94, 58)));
/// assert!(parse_color_point("999,0,0").is_err());
/// ```
pub fn parse_color_point(s: &str) -> Result<Rgb, ColorParseError> {
    if s.trim().is_empty() {
        return Err(ColorParseError::Empty);
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(ColorParseError::ComponentCount { found: parts.len() });
    }

    let mut rgb = [0u8; 3];
    for (component, (part, slot)) in parts.iter().zip(rgb.iter_mut()).enumerate() {
        *slot = parse_component(part.trim(), component)?;
    }
    Ok(Rgb::from_array(rgb))
}

fn parse_component(digits: &str, component: usize) -> Result<u8, ColorParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorParseError::NotDigits { component });
    }
    if digits.len() > 3 {
        return Err(ColorParseError::TooLong { component });
    }
    // At most three ASCII digits, so this fits in u16.
    let value = digits.bytes().fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    u8::try_from(value).map_err(|_| ColorParseError::OutOfRange { component, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_triple() {
        assert_eq!(parse_color_point("255,0,0"), Ok(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn whitespace_around_components() {
        assert_eq!(parse_color_point("\t0 ,  128,\n255  "), Ok(Rgb::new(0, 128, 255)));
    }

    #[test]
    fn leading_zeros_within_three_digits() {
        assert_eq!(parse_color_point("007,08,9"), Ok(Rgb::new(7, 8, 9)));
    }

    #[test]
    fn out_of_range_component() {
        assert_eq!(
            parse_color_point("999,0,0"),
            Err(ColorParseError::OutOfRange { component: 0, value: 999 })
        );
        assert_eq!(
            parse_color_point("0,0,256"),
            Err(ColorParseError::OutOfRange { component: 2, value: 256 })
        );
    }

    #[test]
    fn letters_are_rejected() {
        assert_eq!(parse_color_point("a,b,c"), Err(ColorParseError::NotDigits { component: 0 }));
    }

    #[test]
    fn four_digits_are_rejected() {
        assert_eq!(parse_color_point("1,0255,0"), Err(ColorParseError::TooLong { component: 1 }));
    }

    #[test]
    fn wrong_component_count() {
        assert_eq!(parse_color_point("1,2"), Err(ColorParseError::ComponentCount { found: 2 }));
        assert_eq!(parse_color_point("1,2,3,"), Err(ColorParseError::ComponentCount { found: 4 }));
    }

    #[test]
    fn signs_decimals_and_inner_spaces_are_rejected() {
        assert!(parse_color_point("-1,0,0").is_err());
        assert!(parse_color_point("1.5,0,0").is_err());
        assert!(parse_color_point("1 2,0,0").is_err());
        assert!(parse_color_point("1,,0").is_err());
    }

    #[test]
    fn empty_values() {
        assert_eq!(parse_color_point(""), Err(ColorParseError::Empty));
        assert_eq!(parse_color_point("   "), Err(ColorParseError::Empty));
    }
}
