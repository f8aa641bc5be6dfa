//! Error types for duration parsing and formatting.
//!
//! Two distinct failure classes exist:
//! - Fatal contract violations, surfaced as [`ParseError`] / [`FormatError`]
//!   and never recovered internally.
//! - Soft grammar mismatches, surfaced as the [`f64::NAN`] sentinel from the
//!   parsers rather than as an error; callers check the sentinel explicitly.
//!
//! All errors implement `Send + Sync` and carry the offending value.

use thiserror::Error;

/// Top-level conversion error.
///
/// Returned by the combined [`crate::millis::convert`] and
/// [`crate::seconds::convert`] entry points. It wraps both subsystem errors
/// for unified handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Parser contract violation.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Formatter contract violation.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Parser contract violations.
///
/// A string that merely fails to match the grammar is not an error: the
/// parsers return [`f64::NAN`] for it. These variants cover the fatal
/// preconditions instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input length outside the accepted 1 to 99 characters.
    #[error("input must be 1 to 99 characters long, got {length}")]
    InvalidLength {
        /// Character count of the rejected input.
        length: usize,
    },

    /// The grammar matched a unit token that the unit table does not map.
    #[error("unknown unit \"{unit}\"")]
    UnknownUnit {
        /// The unmapped unit token as written.
        unit: String,
    },

    /// Strict validation rejected a string the grammar cannot match.
    ///
    /// Raised only by [`crate::DurationStr::new`]; the plain parsers report
    /// the same condition through the [`f64::NAN`] sentinel.
    #[error("unparseable duration string {input:?}")]
    Unparseable {
        /// The rejected input.
        input: String,
    },
}

/// Formatter contract violations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    /// Formatting accepts finite numbers only.
    #[error("value must be a finite number, got {value}")]
    NotFinite {
        /// The rejected value.
        value: f64,
    },
}
