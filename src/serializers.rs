//! Serde adapters for duration-valued fields.
//!
//! Attach with `#[serde(with = ...)]` to an `f64` field to accept
//! human-readable durations in configuration and render them back out:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct CacheConfig {
//!     #[serde(with = "humanspan::serializers::millis")]
//!     ttl: f64,
//! }
//!
//! let config: CacheConfig = serde_json::from_str(r#"{"ttl": "12 hours"}"#).unwrap();
//! assert_eq!(config.ttl, 43_200_000.0);
//! assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"ttl":"12h"}"#);
//! ```
//!
//! Deserialization accepts either a duration string or a raw number already
//! in base units. Strings that miss the grammar are a deserialization error
//! here, not a sentinel: a config field holding `NaN` helps nobody.

use std::fmt;

use serde::de::{self, Visitor};
use serde::Serializer;

use crate::format::{format_with, FormatOptions};
use crate::parse::parse_with;
use crate::unit::Base;

fn serialize_base<S>(value: f64, base: Base, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered =
        format_with(value, base, FormatOptions::default()).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&rendered)
}

struct DurationVisitor {
    base: Base,
}

impl Visitor<'_> for DurationVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration string or a number")
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let value = parse_with(text, self.base).map_err(E::custom)?;
        if value.is_nan() {
            return Err(E::custom(format!("unparseable duration string {text:?}")));
        }
        Ok(value)
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value as f64)
    }
}

/// Serializer for `f64` millisecond counts as short duration strings.
pub mod millis {
    use serde::{Deserializer, Serializer};

    use super::{serialize_base, DurationVisitor};
    use crate::unit::Base;

    /// Render the field through the short millisecond formatter.
    ///
    /// # Errors
    ///
    /// Fails on non-finite values.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_base(*value, Base::Milliseconds, serializer)
    }

    /// Accept a duration string or a raw millisecond count.
    ///
    /// # Errors
    ///
    /// Fails on unparseable strings and on length violations.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DurationVisitor {
            base: Base::Milliseconds,
        })
    }
}

/// Serializer for `f64` second counts as short duration strings.
pub mod seconds {
    use serde::{Deserializer, Serializer};

    use super::{serialize_base, DurationVisitor};
    use crate::unit::Base;

    /// Render the field through the short seconds formatter.
    ///
    /// # Errors
    ///
    /// Fails on non-finite values.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_base(*value, Base::Seconds, serializer)
    }

    /// Accept a duration string or a raw second count.
    ///
    /// # Errors
    ///
    /// Fails on unparseable strings and on length violations.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DurationVisitor {
            base: Base::Seconds,
        })
    }
}
