//! Duration conversions counted in milliseconds.
//!
//! This is the surface to use when your durations are millisecond counts,
//! the common convention for timeouts and TTLs:
//!
//! ```
//! use humanspan::{millis, FormatOptions};
//!
//! # fn main() -> Result<(), humanspan::Error> {
//! assert_eq!(millis::parse("1.5h")?, 5_400_000.0);
//! assert_eq!(millis::format(5_400_000.0, FormatOptions::default())?, "2h");
//! # Ok(())
//! # }
//! ```
//!
//! The mirrored [`crate::seconds`] surface is identical apart from its base
//! unit.

use crate::convert::{convert_with, Input, Output};
use crate::error::{Error, FormatError, ParseError};
use crate::format::{format_with, FormatOptions};
use crate::parse::{parse_strict_with, parse_with, DurationStr};
use crate::unit::Base;

const BASE: Base = Base::Milliseconds;

/// Parse a duration string into milliseconds.
///
/// A missing unit means the value already counts milliseconds. Strings that
/// miss the grammar yield [`f64::NAN`], the soft-failure sentinel — check for
/// it with [`f64::is_nan`].
///
/// ```
/// use humanspan::millis;
///
/// # fn main() -> Result<(), humanspan::ParseError> {
/// assert_eq!(millis::parse("1m")?, 60_000.0);
/// assert_eq!(millis::parse("100")?, 100.0);
/// assert_eq!(millis::parse("-.5h")?, -1_800_000.0);
/// assert!(millis::parse("two minutes")?.is_nan());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ParseError::InvalidLength`] for inputs outside 1 to 99
/// characters and [`ParseError::UnknownUnit`] if the grammar ever matched a
/// token the unit table does not map.
pub fn parse(input: &str) -> Result<f64, ParseError> {
    parse_with(input, BASE)
}

/// Parse a pre-validated duration string into milliseconds.
///
/// Identical at the value level to [`parse`]; the validation already ran in
/// [`DurationStr::new`], so this conversion is infallible.
#[must_use]
pub fn parse_strict(expr: DurationStr<'_>) -> f64 {
    parse_strict_with(expr, BASE)
}

/// Render a millisecond count as a duration string.
///
/// ```
/// use humanspan::{millis, FormatOptions};
///
/// # fn main() -> Result<(), humanspan::FormatError> {
/// assert_eq!(millis::format(60_000.0, FormatOptions::default())?, "1m");
/// assert_eq!(
///     millis::format(60_000.0, FormatOptions { long: true })?,
///     "1 minute"
/// );
/// assert_eq!(millis::format(499.5, FormatOptions::default())?, "499.5ms");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`FormatError::NotFinite`] unless `value` is a finite number.
pub fn format(value: f64, options: FormatOptions) -> Result<String, FormatError> {
    format_with(value, BASE, options)
}

/// Parse or format in one call: text parses, numbers format.
///
/// ```
/// use humanspan::{millis, FormatOptions, Input, Output};
///
/// # fn main() -> Result<(), humanspan::Error> {
/// let parsed = millis::convert(Input::from("2 days"), FormatOptions::default())?;
/// assert_eq!(parsed, Output::Duration(172_800_000.0));
///
/// let rendered = millis::convert(Input::from(172_800_000.0), FormatOptions::default())?;
/// assert_eq!(rendered, Output::Text("2d".to_string()));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Propagates the routed branch's [`ParseError`] or [`FormatError`] as the
/// top-level [`Error`].
pub fn convert(input: Input<'_>, options: FormatOptions) -> Result<Output, Error> {
    convert_with(input, BASE, options)
}
