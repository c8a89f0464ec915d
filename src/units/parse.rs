use std::str::FromStr;

use super::kind::UnitKind;
use super::value::{pt, UnitValue};
use super::PICA;
use crate::error::UnitError;

/// Anything [`units`] knows how to turn into a [`UnitValue`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UnitInput<'a> {
    Number(f64),
    Unit(UnitValue),
    Token(&'a str),
}

impl From<f64> for UnitInput<'_> {
    fn from(value: f64) -> Self {
        UnitInput::Number(value)
    }
}

impl From<i32> for UnitInput<'_> {
    fn from(value: i32) -> Self {
        UnitInput::Number(value as f64)
    }
}

impl From<UnitValue> for UnitInput<'_> {
    fn from(value: UnitValue) -> Self {
        UnitInput::Unit(value)
    }
}

impl<'a> From<&'a str> for UnitInput<'a> {
    fn from(value: &'a str) -> Self {
        UnitInput::Token(value)
    }
}

impl<'a> From<&'a String> for UnitInput<'a> {
    fn from(value: &'a String) -> Self {
        UnitInput::Token(value.as_str())
    }
}

/// Build a unit value from a number, a unit value or a token, optionally in a
/// requested kind.
///
/// Numbers are points unless `target` names another kind, in which case the
/// number is read in that kind. Unit values and tokens are converted to
/// `target` through points.
///
/// ```
/// use pageflow::units::{mm, units, UnitKind};
///
/// assert_eq!(units(12, None).unwrap().to_string(), "12pt");
/// assert_eq!(units(20, Some(UnitKind::MILLIMETER)).unwrap().to_string(), "20mm");
/// assert_eq!(units("12pt", Some(UnitKind::MILLIMETER)).unwrap().to_string(), "4.23mm");
/// assert_eq!(units(mm(12.0), Some(UnitKind::POINT)).unwrap().to_string(), "34.02pt");
/// assert!(units("SomethingElse", None).is_err());
/// ```
pub fn units<'a, I: Into<UnitInput<'a>>>(
    source: I,
    target: Option<UnitKind>,
) -> Result<UnitValue, UnitError> {
    let value = match source.into() {
        UnitInput::Number(number) => match target {
            Some(kind) => return Ok(UnitValue::new(kind, number)),
            None => pt(number),
        },
        UnitInput::Unit(value) => value,
        UnitInput::Token(token) => parse(token)?,
    };
    Ok(match target {
        Some(kind) if kind != value.kind() => value.convert(kind),
        _ => value,
    })
}

/// Parse a unit token such as `12pt`, `4.5mm`, `1"`, `0.4inch`, `2p6`,
/// `1.4em`, `50%`, `80 perc`, `2fr`, `0.25col`, or a bare number (points).
///
/// Whitespace around and inside the token is ignored, as is case. The unit
/// tag may also come first (`pt12`); for picas that prefix form means points,
/// so `p6` is half a pica.
///
/// ```
/// use pageflow::units::parse;
///
/// assert_eq!(parse("12pt").unwrap().pt(), 12.0);
/// assert_eq!(parse("20p6").unwrap().pt(), 246.0);
/// assert!(parse("bogus").is_err());
/// ```
pub fn parse(token: &str) -> Result<UnitValue, UnitError> {
    let invalid = || UnitError::Parse(token.to_string());
    let normalized = token.trim().to_ascii_lowercase().replace("pica", "p");
    let parts = Parts::scan(&normalized).ok_or_else(invalid)?;
    log::trace!("unit token {token:?} scanned as {parts:?}");

    let kind = UnitKind::from_tag(parts.tag).ok_or_else(invalid)?;
    if kind == UnitKind::PICA {
        if parts.lead.is_empty() && parts.trail.is_empty() {
            return Err(invalid());
        }
        let picas = number_or_zero(parts.lead).ok_or_else(invalid)?;
        let points = number_or_zero(parts.trail).ok_or_else(invalid)?;
        return Ok(UnitValue::new(kind, picas + points / PICA));
    }

    let number = match (parts.lead.is_empty(), parts.trail.is_empty()) {
        (false, true) => parts.lead,
        (true, false) => parts.trail,
        _ => return Err(invalid()),
    };
    let number = f64::from_str(number).map_err(|_| invalid())?;
    Ok(UnitValue::new(kind, number))
}

impl FromStr for UnitValue {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// A token split into an optional leading number, a unit tag, and an optional
/// trailing number.
#[derive(Debug)]
struct Parts<'a> {
    lead: &'a str,
    tag: &'a str,
    trail: &'a str,
}

impl<'a> Parts<'a> {
    fn scan(token: &'a str) -> Option<Parts<'a>> {
        let token = token.trim();
        let lead_end = token.find(|c| !is_number_char(c)).unwrap_or(token.len());
        let (lead, rest) = token.split_at(lead_end);

        let rest = rest.trim_start();
        let tag_end = rest.find(|c| !is_tag_char(c)).unwrap_or(rest.len());
        let (tag, rest) = rest.split_at(tag_end);

        let trail = rest.trim();
        if !trail.chars().all(is_number_char) {
            return None;
        }
        Some(Parts { lead, tag, trail })
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-' || c == '+'
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '"' || c == '%'
}

fn number_or_zero(s: &str) -> Option<f64> {
    if s.is_empty() {
        Some(0.0)
    } else {
        f64::from_str(s).ok()
    }
}
