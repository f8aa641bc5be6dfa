//! The duration string grammar and parser core.
//!
//! ```text
//! duration = sign? number ws* alias?
//! sign     = '-'
//! number   = digit* '.'? digit+
//! ws       = ' '
//! alias    = any spelling from the unit table
//! ```
//!
//! The grammar is anchored on both ends and matched case-insensitively. Its
//! alias alternation is generated from [`Unit::ALL`], so the regular
//! expression and the unit table cannot disagree.
//!
//! A string that misses the grammar is a soft failure: the parsers return
//! [`f64::NAN`] for it. The fatal preconditions (length, unmapped unit) are
//! [`ParseError`]s instead.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;
use crate::unit::{Base, Unit};

/// Longest accepted input, in characters.
pub const MAX_INPUT_LEN: usize = 99;

lazy_static! {
    static ref GRAMMAR: Regex = compile_grammar();
}

/// Assemble the anchored grammar from the unit table's spellings.
fn grammar_pattern() -> String {
    let mut aliases: Vec<&'static str> = Unit::ALL
        .iter()
        .flat_map(|unit| unit.aliases().iter().copied())
        .collect();
    // Longest spelling first, so no alias can shadow a longer one.
    aliases.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    format!(r"^(?i)(-?[0-9]*\.?[0-9]+) *({})?$", aliases.join("|"))
}

#[allow(clippy::expect_used)]
fn compile_grammar() -> Regex {
    Regex::new(&grammar_pattern()).expect("grammar assembled from static alias data")
}

/// One successfully tokenized duration string.
#[derive(Debug)]
pub(crate) struct Scanned<'a> {
    /// The numeric literal, sign included.
    pub(crate) number: &'a str,
    /// The recognized unit, `None` when the input carried no alias.
    pub(crate) unit: Option<Unit>,
}

/// Split `input` into its numeric literal and optional unit.
///
/// Returns `Ok(None)` when the string does not match the grammar.
///
/// # Errors
///
/// Returns [`ParseError::InvalidLength`] for inputs outside 1 to 99
/// characters and [`ParseError::UnknownUnit`] when the grammar matches a
/// token missing from the unit table.
pub(crate) fn scan(input: &str) -> Result<Option<Scanned<'_>>, ParseError> {
    let length = input.chars().count();
    if length == 0 || length > MAX_INPUT_LEN {
        return Err(ParseError::InvalidLength { length });
    }

    let Some(captures) = GRAMMAR.captures(input) else {
        return Ok(None);
    };

    let number = captures.get(1).map_or("", |m| m.as_str());
    let unit = match captures.get(2) {
        None => None,
        Some(token) => match Unit::from_alias(token.as_str()) {
            Some(unit) => Some(unit),
            None => {
                return Err(ParseError::UnknownUnit {
                    unit: token.as_str().to_string(),
                })
            }
        },
    };

    Ok(Some(Scanned { number, unit }))
}

/// Numeric value of a tokenized duration, in `base` units.
fn evaluate(scanned: &Scanned<'_>, base: Base) -> f64 {
    let unit = scanned.unit.unwrap_or_else(|| base.unit());
    // The grammar only admits literals the float parser accepts.
    scanned
        .number
        .parse::<f64>()
        .map_or(f64::NAN, |n| n * base.scale(unit))
}

/// Parse `input` against the grammar and convert it to `base` units.
///
/// Grammar mismatches yield `Ok(f64::NAN)`.
pub(crate) fn parse_with(input: &str, base: Base) -> Result<f64, ParseError> {
    match scan(input)? {
        None => Ok(f64::NAN),
        Some(scanned) => Ok(evaluate(&scanned, base)),
    }
}

/// A duration string validated against the grammar ahead of time.
///
/// Constructing one runs the full check once; [`crate::millis::parse_strict`]
/// and [`crate::seconds::parse_strict`] then convert without another
/// fallible step. Use it to reject malformed configuration early and convert
/// later:
///
/// ```
/// use humanspan::{millis, seconds, DurationStr};
///
/// # fn main() -> Result<(), humanspan::ParseError> {
/// let ttl = DurationStr::new("12 hours")?;
/// assert_eq!(millis::parse_strict(ttl), 43_200_000.0);
/// assert_eq!(seconds::parse_strict(ttl), 43_200.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStr<'a> {
    input: &'a str,
}

impl<'a> DurationStr<'a> {
    /// Validate `input` against the duration grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLength`] for inputs outside 1 to 99
    /// characters, [`ParseError::Unparseable`] when the grammar does not
    /// match, and [`ParseError::UnknownUnit`] for a matched but unmapped
    /// unit token.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        match scan(input)? {
            Some(_) => Ok(Self { input }),
            None => Err(ParseError::Unparseable {
                input: input.to_string(),
            }),
        }
    }

    /// The validated source text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.input
    }
}

/// Convert a pre-validated duration string to `base` units.
///
/// Identical at the value level to [`parse_with`]; the fallible arms cannot
/// be reached once [`DurationStr::new`] has vetted the input.
pub(crate) fn parse_strict_with(expr: DurationStr<'_>, base: Base) -> f64 {
    match scan(expr.as_str()) {
        Ok(Some(scanned)) => evaluate(&scanned, base),
        Ok(None) | Err(_) => f64::NAN,
    }
}
