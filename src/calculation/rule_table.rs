//! Adjustment rule table.
//!
//! The six rules are keyed by age bracket and gender. The lookup is an
//! exhaustive match, so a missing combination fails to compile.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AgeBracket;
use crate::error::{EngineError, EngineResult};
use crate::models::Gender;

/// The constants applied for one bracket and gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRule {
    /// Percentage added to the base salary.
    pub readjustment_percent: Decimal,
    /// Flat amount subtracted for ten years of service or fewer.
    pub discount_amount: Decimal,
    /// Flat amount added for more than ten years of service.
    pub surcharge_amount: Decimal,
}

impl AdjustmentRule {
    const fn new(readjustment_percent: u32, discount_amount: u32, surcharge_amount: u32) -> Self {
        Self {
            readjustment_percent: Decimal::from_parts(readjustment_percent, 0, 0, false, 0),
            discount_amount: Decimal::from_parts(discount_amount, 0, 0, false, 0),
            surcharge_amount: Decimal::from_parts(surcharge_amount, 0, 0, false, 0),
        }
    }
}

const YOUNG_ADULT_MALE: AdjustmentRule = AdjustmentRule::new(10, 10, 17);
const YOUNG_ADULT_FEMALE: AdjustmentRule = AdjustmentRule::new(8, 11, 16);
const MID_CAREER_MALE: AdjustmentRule = AdjustmentRule::new(8, 5, 15);
const MID_CAREER_FEMALE: AdjustmentRule = AdjustmentRule::new(10, 7, 14);
const SENIOR_MALE: AdjustmentRule = AdjustmentRule::new(15, 15, 13);
const SENIOR_FEMALE: AdjustmentRule = AdjustmentRule::new(17, 17, 12);

/// Looks up the adjustment rule for a bracket and gender.
///
/// Returns `RuleNotFound` for [`AgeBracket::Invalid`]; validated input
/// never reaches that case.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{lookup_rule, AgeBracket};
/// use salary_engine::models::Gender;
/// use rust_decimal::Decimal;
///
/// let rule = lookup_rule(AgeBracket::YoungAdult, Gender::Female).unwrap();
/// assert_eq!(rule.readjustment_percent, Decimal::new(8, 0));
/// assert_eq!(rule.discount_amount, Decimal::new(11, 0));
/// assert_eq!(rule.surcharge_amount, Decimal::new(16, 0));
/// ```
pub fn lookup_rule(bracket: AgeBracket, gender: Gender) -> EngineResult<AdjustmentRule> {
    let rule = match (bracket, gender) {
        (AgeBracket::YoungAdult, Gender::Male) => YOUNG_ADULT_MALE,
        (AgeBracket::YoungAdult, Gender::Female) => YOUNG_ADULT_FEMALE,
        (AgeBracket::MidCareer, Gender::Male) => MID_CAREER_MALE,
        (AgeBracket::MidCareer, Gender::Female) => MID_CAREER_FEMALE,
        (AgeBracket::Senior, Gender::Male) => SENIOR_MALE,
        (AgeBracket::Senior, Gender::Female) => SENIOR_FEMALE,
        (AgeBracket::Invalid, gender) => {
            return Err(EngineError::RuleNotFound { bracket, gender });
        }
    };
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn assert_rule(bracket: AgeBracket, gender: Gender, expected: (i64, i64, i64)) {
        let rule = lookup_rule(bracket, gender).unwrap();
        assert_eq!(
            (
                rule.readjustment_percent,
                rule.discount_amount,
                rule.surcharge_amount
            ),
            (d(expected.0), d(expected.1), d(expected.2)),
            "rule for {} {}",
            bracket,
            gender
        );
    }

    #[test]
    fn test_young_adult_rules() {
        assert_rule(AgeBracket::YoungAdult, Gender::Male, (10, 10, 17));
        assert_rule(AgeBracket::YoungAdult, Gender::Female, (8, 11, 16));
    }

    #[test]
    fn test_mid_career_rules() {
        assert_rule(AgeBracket::MidCareer, Gender::Male, (8, 5, 15));
        assert_rule(AgeBracket::MidCareer, Gender::Female, (10, 7, 14));
    }

    #[test]
    fn test_senior_rules() {
        assert_rule(AgeBracket::Senior, Gender::Male, (15, 15, 13));
        assert_rule(AgeBracket::Senior, Gender::Female, (17, 17, 12));
    }

    #[test]
    fn test_lookup_is_reproducible() {
        let first = lookup_rule(AgeBracket::Senior, Gender::Female).unwrap();
        let second = lookup_rule(AgeBracket::Senior, Gender::Female).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_bracket_is_rejected() {
        for gender in [Gender::Male, Gender::Female] {
            match lookup_rule(AgeBracket::Invalid, gender) {
                Err(EngineError::RuleNotFound { bracket, gender: g }) => {
                    assert_eq!(bracket, AgeBracket::Invalid);
                    assert_eq!(g, gender);
                }
                other => panic!("Expected RuleNotFound, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rule_constants_are_whole_numbers() {
        let rule = lookup_rule(AgeBracket::MidCareer, Gender::Female).unwrap();
        assert_eq!(rule.readjustment_percent.scale(), 0);
        assert_eq!(rule.readjustment_percent.to_string(), "10");
    }
}
