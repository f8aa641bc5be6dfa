//! Duration conversions counted in seconds.
//!
//! Mirrors [`crate::millis`] with seconds as the base unit. Sub-second
//! durations format as whole milliseconds:
//!
//! ```
//! use humanspan::{seconds, FormatOptions};
//!
//! # fn main() -> Result<(), humanspan::Error> {
//! assert_eq!(seconds::parse("100ms")?, 0.1);
//! assert_eq!(seconds::format(0.1, FormatOptions::default())?, "100ms");
//! assert_eq!(seconds::format(3600.0, FormatOptions::default())?, "1h");
//! # Ok(())
//! # }
//! ```

use crate::convert::{convert_with, Input, Output};
use crate::error::{Error, FormatError, ParseError};
use crate::format::{format_with, FormatOptions};
use crate::parse::{parse_strict_with, parse_with, DurationStr};
use crate::unit::Base;

const BASE: Base = Base::Seconds;

/// Parse a duration string into seconds.
///
/// A missing unit means the value already counts seconds. Strings that miss
/// the grammar yield [`f64::NAN`].
///
/// # Errors
///
/// Returns [`ParseError::InvalidLength`] for inputs outside 1 to 99
/// characters and [`ParseError::UnknownUnit`] if the grammar ever matched a
/// token the unit table does not map.
pub fn parse(input: &str) -> Result<f64, ParseError> {
    parse_with(input, BASE)
}

/// Parse a pre-validated duration string into seconds.
#[must_use]
pub fn parse_strict(expr: DurationStr<'_>) -> f64 {
    parse_strict_with(expr, BASE)
}

/// Render a second count as a duration string.
///
/// # Errors
///
/// Returns [`FormatError::NotFinite`] unless `value` is a finite number.
pub fn format(value: f64, options: FormatOptions) -> Result<String, FormatError> {
    format_with(value, BASE, options)
}

/// Parse or format in one call: text parses, numbers format.
///
/// # Errors
///
/// Propagates the routed branch's [`ParseError`] or [`FormatError`] as the
/// top-level [`Error`].
pub fn convert(input: Input<'_>, options: FormatOptions) -> Result<Output, Error> {
    convert_with(input, BASE, options)
}
