//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the employee and
//! work-entry endpoints, along with the numeric-range pre-validation the
//! API layer performs before handing values to the core.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_DAILY_HOURS, MIN_DAILY_HOURS};

/// Request body for `POST /employees`.
///
/// # Example
///
/// ```
/// use payroll_engine::api::CreateEmployeeRequest;
///
/// let request: CreateEmployeeRequest =
///     serde_json::from_str(r#"{"name": "Dana O'Neil", "hourly_rate": "20.00"}"#).unwrap();
/// assert_eq!(request.name, "Dana O'Neil");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
}

/// Request body for `POST /employees/{id}/entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWorkEntryRequest {
    /// The date the work was performed.
    pub work_date: NaiveDate,
    /// The hours worked on that date.
    pub hours_worked: Decimal,
}

impl AddWorkEntryRequest {
    /// Range-checks the hours before the core sees them.
    ///
    /// The core trusts this pre-validation; date business rules are the
    /// core's own responsibility.
    pub fn validate_hours(&self) -> EngineResult<()> {
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.hours_worked) {
            return Err(EngineError::HoursOutOfRange {
                hours: self.hours_worked,
                min: MIN_DAILY_HOURS,
                max: MAX_DAILY_HOURS,
            });
        }
        Ok(())
    }
}
