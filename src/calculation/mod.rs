//! Calculation logic for the payroll engine.
//!
//! This module contains the pure pieces of the pricing pipeline: the closed
//! day classification used by the premium rules, the daily pay computation
//! with its overtime and holiday/weekend premium constants, and the
//! business-rule validation applied to candidate work dates.

mod daily_pay;
mod date_rules;
mod day_classification;

pub use daily_pay::{OVERTIME_RATE, OVERTIME_THRESHOLD, compute_daily_pay};
pub use date_rules::validate_work_date;
pub use day_classification::DayClass;
