use std::fmt;

/// Why a `data-color-point` value failed to parse.
///
/// Component indices are 0-based (`0` = red).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    /// The value did not split into exactly three comma-separated parts.
    ComponentCount { found: usize },
    /// A component was empty or contained something other than ASCII digits.
    NotDigits { component: usize },
    /// A component had more than three digits.
    TooLong { component: usize },
    /// A component was above 255.
    OutOfRange { component: usize, value: u16 },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => f.write_str("empty color point"),
            ColorParseError::ComponentCount { found } => {
                write!(f, "expected 3 comma-separated components, found {found}")
            }
            ColorParseError::NotDigits { component } => {
                write!(f, "{} component is not a decimal integer", channel_name(*component))
            }
            ColorParseError::TooLong { component } => {
                write!(f, "{} component has more than 3 digits", channel_name(*component))
            }
            ColorParseError::OutOfRange { component, value } => {
                write!(f, "{} component {value} is above 255", channel_name(*component))
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

fn channel_name(component: usize) -> &'static str {
    match component {
        0 => "red",
        1 => "green",
        _ => "blue",
    }
}

/// Why a [`BlendConfig`](crate::BlendConfig) could not be built.
///
/// Point indices refer to the order in which points were supplied (document
/// order when scanned from markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two usable color points.
    TooFewPoints { found: usize },
    /// A marked element had no color value.
    MissingColor { index: usize },
    /// A marked element's color value did not parse.
    InvalidColor { index: usize, value: String, source: ColorParseError },
    /// Offsets were not ascending and the order policy rejects that.
    Unsorted { index: usize, offset: i64, previous: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewPoints { found } => {
                write!(f, "at least 2 color points are required, found {found}")
            }
            ConfigError::MissingColor { index } => {
                write!(f, "color point #{index} has no color value")
            }
            ConfigError::InvalidColor { index, value, .. } => {
                write!(f, "color point #{index} has invalid color {value:?}")
            }
            ConfigError::Unsorted { index, offset, previous } => write!(
                f,
                "color point #{index} at offset {offset} comes after a point at offset {previous}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
