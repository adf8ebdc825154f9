//! Work entry model.
//!
//! This module defines the immutable [`WorkEntry`] value recording one day
//! of work for one employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::DayClass;

/// Minimum hours that can be recorded for a single day.
pub const MIN_DAILY_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 1);

/// Maximum hours that can be recorded for a single day.
pub const MAX_DAILY_HOURS: Decimal = Decimal::from_parts(160, 0, 0, false, 1);

/// One day's recorded hours and resulting pay for one employee.
///
/// A `WorkEntry` is created exactly once by
/// [`Employee::add_work_entry`](crate::models::Employee::add_work_entry)
/// after validation and pricing, and never mutated afterwards. The day
/// classification is captured at pricing time so reports do not need to
/// consult the holiday calendar again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    /// The date the work was performed.
    pub work_date: NaiveDate,
    /// The hours worked on that date.
    pub hours_worked: Decimal,
    /// The classification the date had when the entry was priced.
    pub day_class: DayClass,
    /// The pay earned for the day.
    pub daily_pay: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hour_bounds() {
        assert_eq!(MIN_DAILY_HOURS, dec("1.0"));
        assert_eq!(MAX_DAILY_HOURS, dec("16.0"));
    }

    #[test]
    fn test_serialize_work_entry() {
        let entry = WorkEntry {
            work_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            hours_worked: dec("8.0"),
            day_class: DayClass::Regular,
            daily_pay: dec("165.00"),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"work_date\":\"2026-08-03\""));
        assert!(json.contains("\"day_class\":\"regular\""));
        assert!(json.contains("\"hours_worked\":\"8.0\""));
        assert!(json.contains("\"daily_pay\":\"165.00\""));
    }
}
