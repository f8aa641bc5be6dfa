//! The combined parse-or-format dispatch.
//!
//! [`crate::millis::convert`] and [`crate::seconds::convert`] accept either a
//! duration string or a numeric duration through one entry point: text routes
//! to the parser, numbers route to the formatter. Any other input shape is
//! unrepresentable.

use crate::error::Error;
use crate::format::{format_with, FormatOptions};
use crate::parse::parse_with;
use crate::unit::Base;

/// Either input accepted by the combined entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// A duration string to parse.
    Text(&'a str),
    /// A numeric duration, in base units, to format.
    Duration(f64),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Self::Duration(value)
    }
}

/// Result of a combined conversion, mirroring [`Input`].
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Parsed duration in base units; [`f64::NAN`] on grammar mismatch.
    Duration(f64),
    /// Rendered duration string.
    Text(String),
}

impl Output {
    /// The parsed duration, if this conversion parsed.
    #[must_use]
    pub const fn as_duration(&self) -> Option<f64> {
        match self {
            Self::Duration(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// The rendered string, if this conversion formatted.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Duration(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Route `input` to the parser or the formatter for `base`.
pub(crate) fn convert_with(
    input: Input<'_>,
    base: Base,
    options: FormatOptions,
) -> Result<Output, Error> {
    match input {
        Input::Text(text) => Ok(Output::Duration(parse_with(text, base)?)),
        Input::Duration(value) => Ok(Output::Text(format_with(value, base, options)?)),
    }
}
