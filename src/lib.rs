//! humanspan
//!
//! Convert human-readable duration strings (`"1.5h"`, `"53 seconds"`) to
//! numeric durations and back.
//!
//! # Features
//!
//! - Two mirrored surfaces: [`millis`] counts in milliseconds, [`seconds`]
//!   counts in seconds
//! - One grammar for both, generated from a single unit table
//! - Short (`"2d"`) and long (`"2 days"`) rendering with threshold-based
//!   bucket selection
//! - Serde adapters for duration-valued configuration fields
//!
//! # Quick Start
//!
//! ```
//! use humanspan::{millis, seconds, FormatOptions};
//!
//! # fn main() -> Result<(), humanspan::Error> {
//! assert_eq!(millis::parse("1.5h")?, 5_400_000.0);
//! assert_eq!(millis::format(60_000.0, FormatOptions::default())?, "1m");
//! assert_eq!(
//!     millis::format(60_000.0, FormatOptions { long: true })?,
//!     "1 minute"
//! );
//!
//! assert_eq!(seconds::parse("100ms")?, 0.1);
//! assert_eq!(seconds::format(3600.0, FormatOptions::default())?, "1h");
//!
//! // Strings that miss the grammar are a soft failure, not an error.
//! assert!(millis::parse("☃")?.is_nan());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   alias table    ┌────────────┐
//! │    unit    │─────────────────▶│   parse    │──▶ f64 (base units)
//! │ (one table)│                  └────────────┘
//! │            │   thresholds     ┌────────────┐
//! │            │─────────────────▶│   format   │──▶ String
//! └────────────┘                  └────────────┘
//!        millis / seconds pick the base; the core is shared
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
pub mod error;
pub mod format;
pub mod millis;
pub mod parse;
pub mod seconds;
pub mod serializers;
pub mod unit;

pub use convert::{Input, Output};
pub use error::{Error, FormatError, ParseError};
pub use format::FormatOptions;
pub use parse::DurationStr;
pub use unit::Unit;
