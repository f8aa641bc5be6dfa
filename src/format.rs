//! The duration formatter core.
//!
//! Bucket selection walks the units largest first and picks the first whose
//! size the magnitude reaches; anything smaller than one second falls back to
//! the base unit rendering. Pluralization in the long form is decided on the
//! pre-rounded ratio, so `-90000` ms renders as `"-1 minutes"`: its magnitude
//! is a full 1.5 minutes even though the quotient rounds to 1.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::unit::{Base, Unit};

/// Options for the formatter.
///
/// `long` is the only recognized option: `false` renders `"2d"`, `true`
/// renders `"2 days"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Use verbose rendering with spelled-out, pluralized unit names.
    pub long: bool,
}

/// Buckets the formatter walks, largest first. The base unit itself is the
/// fallback, not a bucket.
const BUCKETS: [Unit; 7] = [
    Unit::Year,
    Unit::Month,
    Unit::Week,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
];

/// Round half toward positive infinity, so `-1.5` rounds to `-1`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Long-form rendering of `value` in the bucket sized `scale`.
fn plural(value: f64, abs: f64, scale: f64, name: &str) -> String {
    let suffix = if abs >= scale * 1.5 { "s" } else { "" };
    format!("{} {name}{suffix}", round_half_up(value / scale))
}

/// Sub-second rendering when no bucket applies.
fn fallback(value: f64, base: Base, long: bool) -> String {
    match base {
        // Raw milliseconds, unrounded.
        Base::Milliseconds if long => format!("{value} ms"),
        Base::Milliseconds => format!("{value}ms"),
        // Sub-second seconds are shown as whole milliseconds.
        Base::Seconds if long => format!("{} ms", round_half_up(value * 1000.0)),
        Base::Seconds => format!("{}ms", round_half_up(value * 1000.0)),
    }
}

/// Render `value`, counted in `base` units, as a duration string.
///
/// # Errors
///
/// Returns [`FormatError::NotFinite`] unless `value` is a finite number.
pub(crate) fn format_with(
    value: f64,
    base: Base,
    options: FormatOptions,
) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NotFinite { value });
    }

    let abs = value.abs();
    for unit in BUCKETS {
        let scale = base.scale(unit);
        if abs >= scale {
            return Ok(if options.long {
                plural(value, abs, scale, unit.name())
            } else {
                format!("{}{}", round_half_up(value / scale), unit.abbreviation())
            });
        }
    }

    Ok(fallback(value, base, options.long))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    const LONG: FormatOptions = FormatOptions { long: true };
    const SHORT: FormatOptions = FormatOptions { long: false };

    #[test]
    fn test_round_half_up_ties_toward_positive_infinity() {
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_short_selects_largest_reached_bucket() {
        assert_eq!(
            format_with(60_000.0, Base::Milliseconds, SHORT).unwrap(),
            "1m"
        );
        assert_eq!(
            format_with(86_400_000.0, Base::Milliseconds, SHORT).unwrap(),
            "1d"
        );
        assert_eq!(format_with(3600.0, Base::Seconds, SHORT).unwrap(), "1h");
        assert_eq!(
            format_with(31_557_600.0, Base::Seconds, SHORT).unwrap(),
            "1y"
        );
    }

    #[test]
    fn test_short_rounds_the_quotient() {
        // 90 seconds is 1.5 minutes, which rounds up.
        assert_eq!(
            format_with(90_000.0, Base::Milliseconds, SHORT).unwrap(),
            "2m"
        );
        // 80 seconds is 1.33 minutes, which rounds down.
        assert_eq!(
            format_with(80_000.0, Base::Milliseconds, SHORT).unwrap(),
            "1m"
        );
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // One millisecond short of a minute stays in the seconds bucket.
        assert_eq!(
            format_with(59_999.0, Base::Milliseconds, SHORT).unwrap(),
            "60s"
        );
        assert_eq!(
            format_with(60_000.0, Base::Milliseconds, SHORT).unwrap(),
            "1m"
        );
    }

    #[test]
    fn test_millis_fallback_is_raw_and_unrounded() {
        assert_eq!(
            format_with(499.5, Base::Milliseconds, SHORT).unwrap(),
            "499.5ms"
        );
        assert_eq!(
            format_with(499.5, Base::Milliseconds, LONG).unwrap(),
            "499.5 ms"
        );
        assert_eq!(format_with(0.0, Base::Milliseconds, SHORT).unwrap(), "0ms");
    }

    #[test]
    fn test_seconds_fallback_converts_to_milliseconds() {
        assert_eq!(format_with(0.1, Base::Seconds, SHORT).unwrap(), "100ms");
        assert_eq!(format_with(0.1, Base::Seconds, LONG).unwrap(), "100 ms");
        assert_eq!(format_with(0.0004, Base::Seconds, SHORT).unwrap(), "0ms");
    }

    #[test]
    fn test_long_pluralizes_on_the_pre_rounded_ratio() {
        // 1.4 minutes: singular.
        assert_eq!(
            format_with(84_000.0, Base::Milliseconds, LONG).unwrap(),
            "1 minute"
        );
        // Exactly 1.5 minutes: plural.
        assert_eq!(
            format_with(90_000.0, Base::Milliseconds, LONG).unwrap(),
            "2 minutes"
        );
        // Negative 1.5 minutes: the quotient rounds to -1, yet the magnitude
        // crosses the plural threshold.
        assert_eq!(
            format_with(-90_000.0, Base::Milliseconds, LONG).unwrap(),
            "-1 minutes"
        );
    }

    #[test]
    fn test_long_singular_forms() {
        assert_eq!(
            format_with(60_000.0, Base::Milliseconds, LONG).unwrap(),
            "1 minute"
        );
        assert_eq!(
            format_with(-60_000.0, Base::Milliseconds, LONG).unwrap(),
            "-1 minute"
        );
        assert_eq!(format_with(3600.0, Base::Seconds, LONG).unwrap(), "1 hour");
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        assert_eq!(
            format_with(-60_000.0, Base::Milliseconds, SHORT).unwrap(),
            "-1m"
        );
        assert_eq!(format_with(-0.1, Base::Seconds, SHORT).unwrap(), "-100ms");
    }

    #[test]
    fn test_month_and_week_buckets() {
        assert_eq!(
            format_with(2_629_746_000.0, Base::Milliseconds, SHORT).unwrap(),
            "1mo"
        );
        assert_eq!(
            format_with(604_800.0, Base::Seconds, LONG).unwrap(),
            "1 week"
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = format_with(value, Base::Milliseconds, SHORT).unwrap_err();
            assert!(matches!(err, FormatError::NotFinite { .. }), "{value}");
        }
    }

    #[test]
    fn test_default_options_are_short() {
        assert_eq!(FormatOptions::default(), SHORT);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FormatOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.long);
        let options: FormatOptions = serde_json::from_str(r#"{"long":true}"#).unwrap();
        assert!(options.long);
    }
}
