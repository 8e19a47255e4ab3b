//! Employee input validation.
//!
//! Each rule is checked independently and every violation is collected,
//! in rule order. The bracket check runs only once all basic checks pass,
//! so an age like 150 reports a single, specific message.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::numeric::{parse_decimal, parse_integer, parse_whole};
use crate::calculation::classify_decimal_age;
use crate::error::{EngineError, EngineResult};
use crate::models::{Gender, RawEmployeeInput, ValidatedEmployee, ValidationOutcome, Violation};

/// Lowest accepted age before the bracket check (exclusive).
pub const MINIMUM_AGE_EXCLUSIVE: i64 = 16;

/// Lowest accepted hire year (exclusive).
pub const MINIMUM_HIRE_YEAR_EXCLUSIVE: i64 = 1960;

/// Largest accepted base salary, 10^26.
///
/// The adjusted salary, kept at two decimal places, stays within the
/// range of [`Decimal`] for every rule below this bound.
pub const MAXIMUM_BASE_SALARY: Decimal =
    Decimal::from_parts(3_825_205_248, 3_704_098_002, 5_421_010, false, 0);

/// Validates raw employee input and returns every violation in rule order.
///
/// An empty outcome means the input can be computed.
///
/// # Examples
///
/// ```
/// use salary_engine::models::{RawEmployeeInput, Violation};
/// use salary_engine::validation::validate_employee_input;
///
/// let raw = RawEmployeeInput::from_fields("15", "x", "1700", "2014", "12345");
/// let outcome = validate_employee_input(&raw);
/// assert_eq!(outcome.violations(), &[Violation::Age, Violation::Gender]);
/// ```
pub fn validate_employee_input(raw: &RawEmployeeInput) -> ValidationOutcome {
    match check_fields(raw) {
        Ok(_) => ValidationOutcome::default(),
        Err(violations) => ValidationOutcome::new(violations),
    }
}

/// Validates raw employee input and converts it into a [`ValidatedEmployee`].
///
/// # Returns
///
/// Returns the validated employee, or `ValidationFailed` carrying every
/// violated rule in order. No partial result is ever produced.
///
/// # Examples
///
/// ```
/// use salary_engine::models::{Gender, RawEmployeeInput};
/// use salary_engine::validation::parse_employee_input;
///
/// let raw = RawEmployeeInput::from_fields("45", "m", "5000", "2000", "7");
/// let employee = parse_employee_input(&raw).unwrap();
/// assert_eq!(employee.gender(), Gender::Male);
/// assert_eq!(employee.age(), 45);
/// ```
pub fn parse_employee_input(raw: &RawEmployeeInput) -> EngineResult<ValidatedEmployee> {
    check_fields(raw).map_err(|violations| EngineError::ValidationFailed { violations })
}

fn check_fields(raw: &RawEmployeeInput) -> Result<ValidatedEmployee, Vec<Violation>> {
    let mut violations = Vec::new();

    let age = check_age(raw.age.as_deref());
    if age.is_none() {
        violations.push(Violation::Age);
    }

    let gender = check_gender(raw.gender.as_deref());
    if gender.is_none() {
        violations.push(Violation::Gender);
    }

    let base_salary = check_base_salary(raw.base_salary.as_deref());
    if let Err(violation) = base_salary {
        violations.push(violation);
    }

    let hire_year = check_hire_year(raw.hire_year.as_deref());
    if hire_year.is_none() {
        violations.push(Violation::HireYear);
    }

    let employee_id = check_employee_id(raw.employee_id.as_deref());
    if employee_id.is_none() {
        violations.push(Violation::EmployeeId);
    }

    let (Some(age), Some(gender), Some(base_salary), Some(hire_year), Some(employee_id)) =
        (age, gender, base_salary.ok(), hire_year, employee_id)
    else {
        return Err(violations);
    };

    let Some(age) = bracketed_age(age) else {
        return Err(vec![Violation::AgeOutOfBracket]);
    };

    Ok(ValidatedEmployee::new(
        age,
        gender,
        base_salary,
        hire_year,
        employee_id,
    ))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn check_age(value: Option<&str>) -> Option<Decimal> {
    parse_decimal(present(value)?).filter(|age| *age > Decimal::from(MINIMUM_AGE_EXCLUSIVE))
}

fn check_gender(value: Option<&str>) -> Option<Gender> {
    Gender::from_code(present(value)?)
}

fn check_base_salary(value: Option<&str>) -> Result<Decimal, Violation> {
    let salary = present(value)
        .and_then(parse_decimal)
        .filter(|salary| !salary.is_sign_negative() || salary.is_zero())
        .ok_or(Violation::BaseSalary)?;
    if salary > MAXIMUM_BASE_SALARY {
        return Err(Violation::BaseSalaryTooLarge);
    }
    Ok(salary)
}

fn check_hire_year(value: Option<&str>) -> Option<i32> {
    parse_integer(present(value)?)
        .filter(|year| *year > MINIMUM_HIRE_YEAR_EXCLUSIVE)
        .and_then(|year| i32::try_from(year).ok())
}

fn check_employee_id(value: Option<&str>) -> Option<u128> {
    parse_whole(present(value)?)
        .filter(|id| id.is_sign_positive() && !id.is_zero())
        .and_then(|id| id.to_u128())
}

/// Returns the age in completed years when it falls in a rated bracket.
///
/// A fractional age is classified as given, so 25.5 is rated and 39.5 is
/// not. Truncating a rated age never changes its bracket.
fn bracketed_age(age: Decimal) -> Option<u8> {
    if !classify_decimal_age(age).is_rated() {
        return None;
    }
    age.trunc().to_u8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_raw() -> RawEmployeeInput {
        RawEmployeeInput::from_fields("18", "F", "1700", "2014", "12345")
    }

    fn violations(raw: &RawEmployeeInput) -> Vec<Violation> {
        validate_employee_input(raw).into_violations()
    }

    #[test]
    fn test_valid_input_has_no_violations() {
        assert!(validate_employee_input(&valid_raw()).is_valid());
    }

    #[test]
    fn test_parse_valid_input() {
        let employee = parse_employee_input(&valid_raw()).unwrap();
        assert_eq!(employee.age(), 18);
        assert_eq!(employee.gender(), Gender::Female);
        assert_eq!(employee.base_salary(), Decimal::new(1700, 0));
        assert_eq!(employee.hire_year(), 2014);
        assert_eq!(employee.employee_id(), 12345);
    }

    #[test]
    fn test_empty_input_reports_five_violations_in_order() {
        assert_eq!(
            violations(&RawEmployeeInput::default()),
            vec![
                Violation::Age,
                Violation::Gender,
                Violation::BaseSalary,
                Violation::HireYear,
                Violation::EmployeeId,
            ]
        );
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let raw = RawEmployeeInput::from_fields("", "", "", "", "");
        assert_eq!(violations(&raw).len(), 5);
    }

    /// Age 15 fails the basic age rule.
    #[test]
    fn test_age_fifteen_is_rejected() {
        let mut raw = valid_raw();
        raw.age = Some("15".to_string());
        assert_eq!(violations(&raw), vec![Violation::Age]);
    }

    #[test]
    fn test_age_sixteen_is_rejected() {
        let mut raw = valid_raw();
        raw.age = Some("16".to_string());
        assert_eq!(violations(&raw), vec![Violation::Age]);
    }

    /// Age 17 passes the basic rule but has no bracket.
    #[test]
    fn test_age_seventeen_fails_bracket_check_only() {
        let mut raw = valid_raw();
        raw.age = Some("17".to_string());
        assert_eq!(violations(&raw), vec![Violation::AgeOutOfBracket]);
    }

    #[test]
    fn test_age_above_ninety_nine_fails_bracket_check() {
        let mut raw = valid_raw();
        raw.age = Some("150".to_string());
        assert_eq!(violations(&raw), vec![Violation::AgeOutOfBracket]);
    }

    #[test]
    fn test_fractional_age_inside_bracket_is_accepted() {
        let mut raw = valid_raw();
        raw.age = Some("25.5".to_string());
        assert!(validate_employee_input(&raw).is_valid());

        let employee = parse_employee_input(&raw).unwrap();
        assert_eq!(employee.age(), 25);
    }

    #[test]
    fn test_fractional_age_between_brackets_has_no_bracket() {
        let mut raw = valid_raw();
        for age in ["17.5", "39.5", "69.5", "99.5"] {
            raw.age = Some(age.to_string());
            assert_eq!(violations(&raw), vec![Violation::AgeOutOfBracket], "age {}", age);
        }
    }

    #[test]
    fn test_bracket_check_skipped_when_other_rules_fail() {
        let mut raw = valid_raw();
        raw.age = Some("150".to_string());
        raw.employee_id = Some("0".to_string());
        assert_eq!(violations(&raw), vec![Violation::EmployeeId]);
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let mut raw = valid_raw();
        raw.age = Some("eighteen".to_string());
        assert_eq!(violations(&raw), vec![Violation::Age]);
    }

    /// Gender "x" alone yields only the gender message.
    #[test]
    fn test_invalid_gender_is_rejected() {
        let mut raw = valid_raw();
        raw.gender = Some("x".to_string());
        assert_eq!(violations(&raw), vec![Violation::Gender]);
    }

    /// Invalid age and gender together keep rule order.
    #[test]
    fn test_invalid_age_and_gender_keep_order() {
        let mut raw = valid_raw();
        raw.age = Some("15".to_string());
        raw.gender = Some("x".to_string());

        let outcome = validate_employee_input(&raw);
        assert_eq!(
            outcome.messages(),
            vec![
                "Age must be a number greater than 16.".to_string(),
                "Gender must be M (male) or F (female).".to_string(),
            ]
        );
    }

    #[test]
    fn test_lowercase_gender_is_accepted() {
        let mut raw = valid_raw();
        raw.gender = Some("m".to_string());
        let employee = parse_employee_input(&raw).unwrap();
        assert_eq!(employee.gender(), Gender::Male);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut raw = valid_raw();
        raw.base_salary = Some("-0.01".to_string());
        assert_eq!(violations(&raw), vec![Violation::BaseSalary]);
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        let mut raw = valid_raw();
        raw.base_salary = Some("0".to_string());
        assert!(validate_employee_input(&raw).is_valid());

        raw.base_salary = Some("-0".to_string());
        assert!(validate_employee_input(&raw).is_valid());
    }

    #[test]
    fn test_salary_above_maximum_is_rejected() {
        let mut raw = valid_raw();
        raw.base_salary = Some(Decimal::MAX.to_string());
        assert_eq!(violations(&raw), vec![Violation::BaseSalaryTooLarge]);

        raw.base_salary = Some("100000000000000000000000000.01".to_string());
        assert_eq!(violations(&raw), vec![Violation::BaseSalaryTooLarge]);
    }

    #[test]
    fn test_maximum_salary_is_accepted() {
        let mut raw = valid_raw();
        raw.base_salary = Some(MAXIMUM_BASE_SALARY.to_string());
        assert_eq!(MAXIMUM_BASE_SALARY.to_string(), "100000000000000000000000000");
        assert!(validate_employee_input(&raw).is_valid());
    }

    #[test]
    fn test_salary_with_trailing_text_is_rejected() {
        let mut raw = valid_raw();
        raw.base_salary = Some("1700abc".to_string());
        assert_eq!(violations(&raw), vec![Violation::BaseSalary]);
    }

    #[test]
    fn test_hire_year_boundary() {
        let mut raw = valid_raw();
        raw.hire_year = Some("1960".to_string());
        assert_eq!(violations(&raw), vec![Violation::HireYear]);

        raw.hire_year = Some("1961".to_string());
        assert!(validate_employee_input(&raw).is_valid());
    }

    #[test]
    fn test_fractional_hire_year_is_rejected() {
        let mut raw = valid_raw();
        raw.hire_year = Some("2014.5".to_string());
        assert_eq!(violations(&raw), vec![Violation::HireYear]);
    }

    #[test]
    fn test_employee_id_must_be_positive_integer() {
        let mut raw = valid_raw();
        for bad in ["0", "-1", "1.5", "abc"] {
            raw.employee_id = Some(bad.to_string());
            assert_eq!(violations(&raw), vec![Violation::EmployeeId], "id {}", bad);
        }
        raw.employee_id = Some("1".to_string());
        assert!(validate_employee_input(&raw).is_valid());
    }

    #[test]
    fn test_employee_id_beyond_i64_is_accepted() {
        let mut raw = valid_raw();
        raw.employee_id = Some("1e20".to_string());
        let employee = parse_employee_input(&raw).unwrap();
        assert_eq!(employee.employee_id(), 10u128.pow(20));

        raw.employee_id = Some("9223372036854775808".to_string());
        let employee = parse_employee_input(&raw).unwrap();
        assert_eq!(employee.employee_id(), 9_223_372_036_854_775_808);
    }

    #[test]
    fn test_numeric_fields_are_trimmed() {
        let raw = RawEmployeeInput::from_fields(" 45 ", "M", " 5000 ", "2000 ", " 7");
        let employee = parse_employee_input(&raw).unwrap();
        assert_eq!(employee.age(), 45);
        assert_eq!(employee.employee_id(), 7);
    }

    #[test]
    fn test_parse_failure_carries_all_violations() {
        let raw = RawEmployeeInput::from_fields("15", "x", "1700", "2014", "12345");
        match parse_employee_input(&raw) {
            Err(EngineError::ValidationFailed { violations }) => {
                assert_eq!(violations, vec![Violation::Age, Violation::Gender]);
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_validation_is_deterministic(
            age in ".{0,4}",
            gender in ".{0,2}",
            salary in ".{0,6}",
        ) {
            let raw = RawEmployeeInput::from_fields(age, gender, salary, "2014", "1");
            prop_assert_eq!(validate_employee_input(&raw), validate_employee_input(&raw));
        }

        #[test]
        fn prop_every_rated_age_validates(age in 18u8..=99) {
            let mut raw = valid_raw();
            raw.age = Some(age.to_string());
            let employee = parse_employee_input(&raw).unwrap();
            prop_assert_eq!(employee.age(), age);
        }

        #[test]
        fn prop_violations_never_repeat(
            age in ".{0,4}",
            gender in ".{0,2}",
            salary in ".{0,6}",
            year in ".{0,5}",
            id in ".{0,5}",
        ) {
            let raw = RawEmployeeInput::from_fields(age, gender, salary, year, id);
            let found = validate_employee_input(&raw).into_violations();
            let mut deduped = found.clone();
            deduped.dedup();
            prop_assert_eq!(found, deduped);
        }
    }
}
