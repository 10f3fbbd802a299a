//! Lexing of adjustment specs.
//!
//! Three token shapes are recognized, scanning left to right for the leftmost match:
//!
//! - `Z` resets the time of day
//! - `=` then `L` or digits, then a unit: `=LD`, `=3M`
//! - `+` or `-`, then digits, then a unit: `-12D`, `+1M`
//!
//! Units are case sensitive: `M` for month, `D` for day.

use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};
use serde::{Deserialize, Serialize};

use crate::{
    BACK_TOKEN, DAY_UNIT, FORTH_TOKEN, LAST_VALUE_TOKEN, MONTH_UNIT, SET_VALUE_TOKEN,
    ZERO_TIME_TOKEN, error::AdjustError, prelude::*,
};

#[allow(clippy::expect_used)]
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let units = format!("[{MONTH_UNIT}{DAY_UNIT}]");
    Regex::new(&format!(
        "(?P<zero>{ZERO_TIME_TOKEN})\
         |{SET_VALUE_TOKEN}(?P<value>{LAST_VALUE_TOKEN}|[0-9]+)(?P<set_unit>{units})\
         |(?P<sign>[{FORTH_TOKEN}{BACK_TOKEN}])(?P<amount>[0-9]+)(?P<shift_unit>{units})"
    ))
    .expect("token pattern is valid")
});

/// A unit a spec token can move or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TimeUnit {
    #[display(fmt = "{}", MONTH_UNIT)]
    Month,
    #[display(fmt = "{}", DAY_UNIT)]
    Day,
}

impl TryFrom<char> for TimeUnit {
    type Error = AdjustError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            MONTH_UNIT => Ok(Self::Month),
            DAY_UNIT => Ok(Self::Day),
            other => Err(AdjustError::UnrecognizedUnit(other)),
        }
    }
}

/// Target of a set token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SetValue {
    /// The largest value valid for the field at the time the token applies
    #[display(fmt = "{}", LAST_VALUE_TOKEN)]
    Last,
    #[display(fmt = "{_0}")]
    Cardinal(u32),
}

/// One step of a spec. `Display` renders the canonical source form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Token {
    /// `Z`
    #[display(fmt = "{}", ZERO_TIME_TOKEN)]
    ZeroTime,
    /// `+1M`, `-12D`
    #[display(fmt = "{amount:+}{unit}")]
    RelativeShift { unit: TimeUnit, amount: i64 },
    /// `=LD`, `=3M`
    #[display(fmt = "{}{value}{unit}", SET_VALUE_TOKEN)]
    CardinalSet { unit: TimeUnit, value: SetValue },
}

/// How to treat text that matches no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Skip it silently
    #[default]
    Lenient,
    /// Fail with `AdjustError::MalformedSpec`, whitespace excepted
    Strict,
}

impl Token {
    fn from_captures(caps: &Captures<'_>) -> Result<Self, AdjustError> {
        if caps.name("zero").is_some() {
            return Ok(Self::ZeroTime);
        }

        if let (Some(value), Some(unit)) = (caps.name("value"), caps.name("set_unit")) {
            let value = if value.as_str().starts_with(LAST_VALUE_TOKEN) {
                SetValue::Last
            } else {
                // Digits only, so the parse can only fail on overflow
                SetValue::Cardinal(value.as_str().parse().unwrap_or(u32::MAX))
            };
            return Ok(Self::CardinalSet {
                unit: unit_of(unit)?,
                value,
            });
        }

        if let (Some(sign), Some(amount), Some(unit)) =
            (caps.name("sign"), caps.name("amount"), caps.name("shift_unit"))
        {
            // Signed parse so that `i64::MIN` survives a display round trip
            let saturated = if sign.as_str().starts_with(BACK_TOKEN) {
                i64::MIN
            } else {
                i64::MAX
            };
            let amount = format!("{}{}", sign.as_str(), amount.as_str())
                .parse()
                .unwrap_or(saturated);
            return Ok(Self::RelativeShift {
                unit: unit_of(unit)?,
                amount,
            });
        }

        let whole = caps.get(0).map_or("", |m| m.as_str());
        Err(AdjustError::MalformedSpec {
            offset:   caps.get(0).map_or(0, |m| m.start()),
            fragment: whole.to_owned(),
        })
    }
}

fn unit_of(m: Match<'_>) -> Result<TimeUnit, AdjustError> {
    TimeUnit::try_from(m.as_str().chars().next().unwrap_or_default())
}

/// Splits a spec into tokens, silently skipping anything that matches no token.
///
/// # Errors
/// Only `AdjustError::UnrecognizedUnit`, which the grammar itself rules out.
pub fn tokenize(spec: &str) -> Result<Vec<Token>, AdjustError> {
    scan(spec, Strictness::Lenient)
}

/// Splits a spec into tokens, rejecting anything but whitespace between them.
///
/// # Errors
/// Returns `AdjustError::MalformedSpec` for the first unrecognized fragment.
pub fn tokenize_strict(spec: &str) -> Result<Vec<Token>, AdjustError> {
    scan(spec, Strictness::Strict)
}

pub(crate) fn scan(spec: &str, strictness: Strictness) -> Result<Vec<Token>, AdjustError> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for caps in TOKEN_PATTERN.captures_iter(spec) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        check_gap(spec, cursor, whole.start(), strictness)?;
        tokens.push(Token::from_captures(&caps)?);
        cursor = whole.end();
    }
    check_gap(spec, cursor, spec.len(), strictness)?;
    Ok(tokens)
}

/// Validates the text between two tokens
fn check_gap(spec: &str, start: usize, end: usize, strictness: Strictness) -> Result<(), AdjustError> {
    if strictness == Strictness::Lenient {
        return Ok(());
    }
    let gap = &spec[start..end];
    match gap.find(|c: char| !c.is_whitespace()) {
        None => Ok(()),
        Some(index) => Err(AdjustError::MalformedSpec {
            offset:   start + index,
            fragment: gap.trim().to_owned(),
        }),
    }
}
