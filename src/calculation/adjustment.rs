//! Salary adjustment calculation.
//!
//! This module combines the age bracket, the rule table, and the tenure
//! threshold into the final adjusted salary, recording every decision as
//! an audit step.

use rust_decimal::{Decimal, RoundingStrategy};

use super::{classify_age, lookup_rule, AdjustmentRule, AgeBracket};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ComputationResult, TenureAdjustment, ValidatedEmployee};

/// Years of service up to which the discount applies (inclusive).
pub const TENURE_THRESHOLD_YEARS: i32 = 10;

/// Rounds a currency amount to two decimal places, half away from zero.
///
/// The result always carries exactly two fractional digits.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("10.005").unwrap()).to_string(), "10.01");
/// assert_eq!(round_currency(Decimal::from_str("5515.0").unwrap()).to_string(), "5515.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Computes the adjusted salary for a validated employee.
///
/// The steps are:
/// 1. Classify the age into its bracket
/// 2. Look up the rule for the bracket and gender
/// 3. Derive years of service as `current_year - hire_year`
/// 4. Select the discount (ten years or fewer) or the surcharge
/// 5. Apply the percentage readjustment to the base salary
/// 6. Add the signed flat amount and round to two decimal places
///
/// `current_year` is supplied by the caller; this function never reads the
/// clock, so identical inputs always produce identical results.
///
/// # Returns
///
/// Returns the [`ComputationResult`], or an error if:
/// - The age has no rule (`RuleNotFound`), which validated input excludes
/// - The arithmetic overflows (`CalculationError`)
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_adjustment;
/// use salary_engine::models::{RawEmployeeInput, TenureAdjustment};
/// use salary_engine::validation::parse_employee_input;
///
/// let raw = RawEmployeeInput::from_fields("18", "F", "1700", "2014", "12345");
/// let employee = parse_employee_input(&raw).unwrap();
///
/// let result = compute_adjustment(&employee, 2024).unwrap();
/// assert_eq!(result.new_salary.to_string(), "1825.00");
/// assert_eq!(result.years_of_service, 10);
/// assert_eq!(result.tenure_adjustment, TenureAdjustment::Discount);
/// ```
pub fn compute_adjustment(
    employee: &ValidatedEmployee,
    current_year: i32,
) -> EngineResult<ComputationResult> {
    let mut audit_trace = Vec::with_capacity(4);

    // Step 1: bracket
    let age = i64::from(employee.age());
    let bracket = classify_age(age);
    audit_trace.push(bracket_step(1, age, bracket));

    // Step 2: rule
    let rule = lookup_rule(bracket, employee.gender())?;
    audit_trace.push(rule_step(2, bracket, employee, &rule));

    // Step 3: tenure
    let years_of_service = current_year
        .checked_sub(employee.hire_year())
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "years of service overflow: {} - {}",
                current_year,
                employee.hire_year()
            ),
        })?;
    let tenure_adjustment = TenureAdjustment::for_years_of_service(years_of_service);
    let applied_amount = match tenure_adjustment {
        TenureAdjustment::Discount => -rule.discount_amount,
        TenureAdjustment::Surcharge => rule.surcharge_amount,
    };
    audit_trace.push(tenure_step(
        3,
        employee.hire_year(),
        current_year,
        years_of_service,
        tenure_adjustment,
        applied_amount,
    ));

    // Step 4: readjustment and the single rounding point
    let multiplier = Decimal::ONE + rule.readjustment_percent / Decimal::ONE_HUNDRED;
    let adjusted_base = employee
        .base_salary()
        .checked_mul(multiplier)
        .ok_or_else(|| salary_overflow(employee.base_salary()))?;
    let unrounded = adjusted_base
        .checked_add(applied_amount)
        .ok_or_else(|| salary_overflow(employee.base_salary()))?;
    let new_salary = round_currency(unrounded);
    audit_trace.push(AuditStep {
        step_number: 4,
        rule_id: "salary_readjustment".to_string(),
        rule_name: "Salary Readjustment".to_string(),
        input: serde_json::json!({
            "base_salary": employee.base_salary().normalize().to_string(),
            "readjustment_percent": rule.readjustment_percent.to_string(),
            "applied_amount": applied_amount.to_string()
        }),
        output: serde_json::json!({
            "adjusted_base": adjusted_base.normalize().to_string(),
            "new_salary": new_salary.to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}; ${} {} ${} = ${}",
            employee.base_salary().normalize(),
            multiplier.normalize(),
            adjusted_base.normalize(),
            adjusted_base.normalize(),
            if applied_amount.is_sign_negative() { "-" } else { "+" },
            applied_amount.abs(),
            new_salary
        ),
    });

    Ok(ComputationResult {
        new_salary,
        readjustment_percent: rule.readjustment_percent,
        applied_amount,
        years_of_service,
        bracket,
        tenure_adjustment,
        audit_trace,
    })
}

fn salary_overflow(base_salary: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!("adjusted salary overflows for base salary {}", base_salary),
    }
}

fn bracket_step(step_number: u32, age: i64, bracket: AgeBracket) -> AuditStep {
    let reasoning = match bracket.age_range() {
        Some((low, high)) => format!(
            "Age {} falls in the {} bracket ({}-{})",
            age, bracket, low, high
        ),
        None => format!("Age {} falls outside every bracket", age),
    };

    AuditStep {
        step_number,
        rule_id: "age_bracket".to_string(),
        rule_name: "Age Bracket Classification".to_string(),
        input: serde_json::json!({ "age": age }),
        output: serde_json::json!({ "bracket": bracket }),
        reasoning,
    }
}

fn rule_step(
    step_number: u32,
    bracket: AgeBracket,
    employee: &ValidatedEmployee,
    rule: &AdjustmentRule,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "rule_lookup".to_string(),
        rule_name: "Adjustment Rule Lookup".to_string(),
        input: serde_json::json!({
            "bracket": bracket,
            "gender": employee.gender()
        }),
        output: serde_json::json!({
            "readjustment_percent": rule.readjustment_percent.to_string(),
            "discount_amount": rule.discount_amount.to_string(),
            "surcharge_amount": rule.surcharge_amount.to_string()
        }),
        reasoning: format!(
            "{} {}: {}% readjustment, ${} discount, ${} surcharge",
            bracket,
            employee.gender(),
            rule.readjustment_percent,
            rule.discount_amount,
            rule.surcharge_amount
        ),
    }
}

fn tenure_step(
    step_number: u32,
    hire_year: i32,
    current_year: i32,
    years_of_service: i32,
    tenure_adjustment: TenureAdjustment,
    applied_amount: Decimal,
) -> AuditStep {
    let comparison = match tenure_adjustment {
        TenureAdjustment::Discount => "<=",
        TenureAdjustment::Surcharge => ">",
    };

    AuditStep {
        step_number,
        rule_id: "tenure_adjustment".to_string(),
        rule_name: "Tenure Adjustment".to_string(),
        input: serde_json::json!({
            "hire_year": hire_year,
            "current_year": current_year
        }),
        output: serde_json::json!({
            "years_of_service": years_of_service,
            "tenure_adjustment": tenure_adjustment,
            "applied_amount": applied_amount.to_string()
        }),
        reasoning: format!(
            "{} years of service {} {}: {} of ${} applied",
            years_of_service,
            comparison,
            TENURE_THRESHOLD_YEARS,
            tenure_adjustment,
            applied_amount.abs()
        ),
    }
}
