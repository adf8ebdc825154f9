//! Pay report models.
//!
//! This module contains the [`PayReport`] structure an employee aggregate
//! produces for its display collaborator: one row per work entry in
//! insertion order plus the accumulated total. Formatting, including any
//! locale-specific currency rendering, is the consumer's job.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::calculation::DayClass;

/// One row of a pay report, describing a single work entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayReportRow {
    /// The date the work was performed.
    pub work_date: NaiveDate,
    /// The day classification the entry was priced under.
    pub day_class: DayClass,
    /// The hours worked on that date.
    pub hours_worked: Decimal,
    /// The pay earned for the day.
    pub daily_pay: Decimal,
}

/// A detailed pay summary for one employee.
///
/// Rows appear in entry insertion order. `total_pay` is the running total
/// of every entry ever added, which always equals the sum of the rows'
/// `daily_pay` values.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, PayReport};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee::new("Robin", Decimal::from_str("25").unwrap()).unwrap();
/// let report: PayReport = employee.report();
/// assert!(report.entries.is_empty());
/// assert_eq!(report.total_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayReport {
    /// The employee's unique identifier.
    pub employee_id: Uuid,
    /// The employee's name.
    pub employee_name: String,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
    /// One row per work entry, in insertion order.
    pub entries: Vec<PayReportRow>,
    /// The accumulated total pay.
    pub total_pay: Decimal,
}
