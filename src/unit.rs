//! Time units, their multipliers, and the alias table.
//!
//! This table is the single source of truth for the whole crate: the parser
//! grammar's alias alternation is generated from it, so the two can never
//! drift apart.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Milliseconds in one second.
pub const SECOND_MS: f64 = 1000.0;

/// Milliseconds in one minute.
pub const MINUTE_MS: f64 = 60.0 * SECOND_MS;

/// Milliseconds in one hour.
pub const HOUR_MS: f64 = 60.0 * MINUTE_MS;

/// Milliseconds in one day.
pub const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Milliseconds in one week.
pub const WEEK_MS: f64 = 7.0 * DAY_MS;

/// Milliseconds in one month, at the mean Gregorian month of 30.436875 days
/// (365.25 / 12).
pub const MONTH_MS: f64 = 30.436_875 * DAY_MS;

/// Milliseconds in one year, at the Julian year of 365.25 days.
pub const YEAR_MS: f64 = 365.25 * DAY_MS;

/// A named time unit recognized by the duration grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// One thousandth of a second.
    Millisecond,
    /// The SI second.
    Second,
    /// 60 seconds.
    Minute,
    /// 60 minutes.
    Hour,
    /// 24 hours.
    Day,
    /// 7 days.
    Week,
    /// 30.436875 days, the Gregorian mean.
    Month,
    /// 365.25 days, the Julian average.
    Year,
}

impl Unit {
    /// Every recognized unit, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];

    /// Accepted spellings for this unit, all lowercase.
    ///
    /// Matching is case-insensitive; no spelling is shared between two
    /// units.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Millisecond => &["milliseconds", "millisecond", "msecs", "msec", "ms"],
            Self::Second => &["seconds", "second", "secs", "sec", "s"],
            Self::Minute => &["minutes", "minute", "mins", "min", "m"],
            Self::Hour => &["hours", "hour", "hrs", "hr", "h"],
            Self::Day => &["days", "day", "d"],
            Self::Week => &["weeks", "week", "w"],
            Self::Month => &["months", "month", "mo"],
            Self::Year => &["years", "year", "yrs", "yr", "y"],
        }
    }

    /// Abbreviation used by the short format.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "mo",
            Self::Year => "y",
        }
    }

    /// Singular name used by the long format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// How many milliseconds one of this unit equals.
    #[must_use]
    pub const fn millis(self) -> f64 {
        match self {
            Self::Millisecond => 1.0,
            Self::Second => SECOND_MS,
            Self::Minute => MINUTE_MS,
            Self::Hour => HOUR_MS,
            Self::Day => DAY_MS,
            Self::Week => WEEK_MS,
            Self::Month => MONTH_MS,
            Self::Year => YEAR_MS,
        }
    }

    /// Look up a unit by any of its spellings, case-insensitively.
    #[must_use]
    pub fn from_alias(token: &str) -> Option<Self> {
        UNIT_BY_ALIAS.get(token.to_lowercase().as_str()).copied()
    }
}

/// Base unit a conversion surface is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Base {
    /// Durations count milliseconds.
    Milliseconds,
    /// Durations count seconds.
    Seconds,
}

impl Base {
    /// The unit assumed when an input carries no alias.
    pub(crate) const fn unit(self) -> Unit {
        match self {
            Self::Milliseconds => Unit::Millisecond,
            Self::Seconds => Unit::Second,
        }
    }

    /// Multiplier converting one `unit` into this base.
    pub(crate) fn scale(self, unit: Unit) -> f64 {
        match self {
            Self::Milliseconds => unit.millis(),
            Self::Seconds => unit.millis() / SECOND_MS,
        }
    }
}

lazy_static! {
    /// Alias lookup, built once from [`Unit::ALL`] and never mutated.
    static ref UNIT_BY_ALIAS: HashMap<&'static str, Unit> = {
        let mut map = HashMap::new();
        for unit in Unit::ALL {
            for alias in unit.aliases() {
                map.insert(*alias, unit);
            }
        }
        map
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_maps_to_its_unit() {
        for unit in Unit::ALL {
            for alias in unit.aliases() {
                assert_eq!(Unit::from_alias(alias), Some(unit), "alias {alias}");
            }
        }
    }

    #[test]
    fn test_from_alias_is_case_insensitive() {
        assert_eq!(Unit::from_alias("H"), Some(Unit::Hour));
        assert_eq!(Unit::from_alias("YEARS"), Some(Unit::Year));
        assert_eq!(Unit::from_alias("Mo"), Some(Unit::Month));
        assert_eq!(Unit::from_alias("mSeCs"), Some(Unit::Millisecond));
    }

    #[test]
    fn test_from_alias_rejects_unknown_tokens() {
        assert_eq!(Unit::from_alias("fortnight"), None);
        assert_eq!(Unit::from_alias(""), None);
        assert_eq!(Unit::from_alias("mss"), None);
    }

    #[test]
    fn test_no_alias_is_shared_between_units() {
        let mut seen = HashMap::new();
        for unit in Unit::ALL {
            for alias in unit.aliases() {
                if let Some(previous) = seen.insert(*alias, unit) {
                    assert_eq!(previous, unit, "alias {alias} mapped twice");
                }
            }
        }
    }

    #[test]
    fn test_millisecond_multipliers() {
        assert_eq!(Unit::Millisecond.millis(), 1.0);
        assert_eq!(Unit::Second.millis(), 1000.0);
        assert_eq!(Unit::Minute.millis(), 60_000.0);
        assert_eq!(Unit::Hour.millis(), 3_600_000.0);
        assert_eq!(Unit::Day.millis(), 86_400_000.0);
        assert_eq!(Unit::Week.millis(), 604_800_000.0);
        assert_eq!(Unit::Month.millis(), 2_629_746_000.0);
        assert_eq!(Unit::Year.millis(), 31_557_600_000.0);
    }

    #[test]
    fn test_seconds_scale_derives_from_millis() {
        assert_eq!(Base::Seconds.scale(Unit::Millisecond), 0.001);
        assert_eq!(Base::Seconds.scale(Unit::Second), 1.0);
        assert_eq!(Base::Seconds.scale(Unit::Minute), 60.0);
        assert_eq!(Base::Seconds.scale(Unit::Hour), 3600.0);
        assert_eq!(Base::Seconds.scale(Unit::Day), 86_400.0);
        assert_eq!(Base::Seconds.scale(Unit::Week), 604_800.0);
        assert_eq!(Base::Seconds.scale(Unit::Month), 2_629_746.0);
        assert_eq!(Base::Seconds.scale(Unit::Year), 31_557_600.0);
    }

    #[test]
    fn test_base_default_units() {
        assert_eq!(Base::Milliseconds.unit(), Unit::Millisecond);
        assert_eq!(Base::Seconds.unit(), Unit::Second);
    }

    #[test]
    fn test_abbreviations_and_names() {
        assert_eq!(Unit::Month.abbreviation(), "mo");
        assert_eq!(Unit::Minute.abbreviation(), "m");
        assert_eq!(Unit::Month.name(), "month");
        assert_eq!(Unit::Millisecond.name(), "millisecond");
    }
}
