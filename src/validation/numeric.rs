//! Lenient-input numeric parsing.
//!
//! Raw fields arrive as text. These helpers turn them into numbers or
//! report that they are not numbers; they never fail loudly.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Parses a decimal number, accepting plain and scientific notation.
///
/// Surrounding whitespace is ignored. Blank text and trailing garbage
/// yield `None`.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parses a whole number. "2014.0" is whole; "2014.5" is not.
pub(crate) fn parse_whole(text: &str) -> Option<Decimal> {
    parse_decimal(text)
        .filter(|value| value.fract().is_zero())
        .map(|value| value.trunc())
}

/// Parses a whole number that fits in an `i64`.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    parse_whole(text)?.to_i64()
}
