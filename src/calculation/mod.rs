//! Calculation logic for the Salary Adjustment Engine.
//!
//! This module contains age bracket classification, the adjustment rule
//! table, and the salary adjustment arithmetic. Every function here is
//! pure: no clock, no I/O, no shared mutable state.

mod adjustment;
mod age_bracket;
mod rule_table;

pub use adjustment::{TENURE_THRESHOLD_YEARS, compute_adjustment, round_currency};
pub use age_bracket::{AgeBracket, classify_age, classify_decimal_age};
pub use rule_table::{AdjustmentRule, lookup_rule};
