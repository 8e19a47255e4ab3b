//! Age bracket classification.
//!
//! This module maps an age in years to the bracket that selects an
//! adjustment rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The age bracket of an employee.
///
/// The three rated brackets are contiguous and inclusive on both ends;
/// every age outside 18..=99 is [`AgeBracket::Invalid`].
///
/// # Example
///
/// ```
/// use salary_engine::calculation::AgeBracket;
///
/// assert_eq!(AgeBracket::MidCareer.age_range(), Some((40, 69)));
/// assert_eq!(AgeBracket::Invalid.age_range(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// Ages 18 to 39.
    YoungAdult,
    /// Ages 40 to 69.
    MidCareer,
    /// Ages 70 to 99.
    Senior,
    /// Any age without an adjustment rule.
    Invalid,
}

impl AgeBracket {
    /// Returns the inclusive age range of a rated bracket.
    pub fn age_range(&self) -> Option<(i64, i64)> {
        match self {
            AgeBracket::YoungAdult => Some((18, 39)),
            AgeBracket::MidCareer => Some((40, 69)),
            AgeBracket::Senior => Some((70, 99)),
            AgeBracket::Invalid => None,
        }
    }

    /// Returns true for the three rated brackets.
    pub fn is_rated(&self) -> bool {
        !matches!(self, AgeBracket::Invalid)
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeBracket::YoungAdult => write!(f, "YoungAdult"),
            AgeBracket::MidCareer => write!(f, "MidCareer"),
            AgeBracket::Senior => write!(f, "Senior"),
            AgeBracket::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Classifies an age into its bracket.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{classify_age, AgeBracket};
///
/// assert_eq!(classify_age(18), AgeBracket::YoungAdult);
/// assert_eq!(classify_age(70), AgeBracket::Senior);
/// assert_eq!(classify_age(100), AgeBracket::Invalid);
/// ```
pub fn classify_age(age: i64) -> AgeBracket {
    match age {
        18..=39 => AgeBracket::YoungAdult,
        40..=69 => AgeBracket::MidCareer,
        70..=99 => AgeBracket::Senior,
        _ => AgeBracket::Invalid,
    }
}

/// Classifies a possibly fractional age into its bracket.
///
/// Each bracket is checked inclusively on its bounds, so 25.5 is a young
/// adult while 39.5 sits between brackets and is invalid.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::{classify_decimal_age, AgeBracket};
///
/// assert_eq!(classify_decimal_age(Decimal::new(255, 1)), AgeBracket::YoungAdult);
/// assert_eq!(classify_decimal_age(Decimal::new(395, 1)), AgeBracket::Invalid);
/// ```
pub fn classify_decimal_age(age: Decimal) -> AgeBracket {
    [
        AgeBracket::YoungAdult,
        AgeBracket::MidCareer,
        AgeBracket::Senior,
    ]
    .into_iter()
    .find(|bracket| {
        bracket.age_range().is_some_and(|(low, high)| {
            age >= Decimal::from(low) && age <= Decimal::from(high)
        })
    })
    .unwrap_or(AgeBracket::Invalid)
}
