//! Employee aggregate.
//!
//! This module defines the [`Employee`] aggregate that owns an ordered
//! sequence of validated work entries and a running pay total, and
//! orchestrates validation, classification and pricing on each insertion.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::{compute_daily_pay, validate_work_date};
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, PayReport, PayReportRow, WorkEntry};

/// Minimum hourly rate an employee can be created with.
pub const MIN_HOURLY_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Maximum hourly rate an employee can be created with.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// An hourly worker with a log of priced work entries.
///
/// The name and hourly rate are fixed at construction. Work entries are
/// appended in insertion order (which is chronological entry order, not
/// necessarily date order) and are never removed or edited. The running
/// total only moves through [`Employee::add_work_entry`], so it always
/// equals the sum of `daily_pay` over all entries ever added.
///
/// # Example
///
/// ```
/// use payroll_engine::config::HolidayConfig;
/// use payroll_engine::models::{Employee, HolidayCalendar};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calendar = HolidayCalendar::for_year(&HolidayConfig::alberta(), 2026);
/// let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
///
/// let mut employee = Employee::new("Dana O'Neil", Decimal::from_str("20").unwrap()).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
/// let entry = employee
///     .add_work_entry(monday, Decimal::from_str("8").unwrap(), &calendar, today)
///     .unwrap();
///
/// assert_eq!(entry.daily_pay, Decimal::from_str("165").unwrap());
/// assert_eq!(employee.total_pay(), Decimal::from_str("165").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Employee {
    id: Uuid,
    name: String,
    hourly_rate: Decimal,
    work_entries: Vec<WorkEntry>,
    total_pay: Decimal,
}

impl Employee {
    /// Creates an employee with a validated name and hourly rate.
    ///
    /// The name must be non-empty and contain only letters, spaces,
    /// hyphens and apostrophes. The hourly rate must lie in
    /// [[`MIN_HOURLY_RATE`], [`MAX_HOURLY_RATE`]].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] naming the offending field.
    pub fn new(name: impl Into<String>, hourly_rate: Decimal) -> EngineResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
        {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "only letters, spaces, hyphens, and apostrophes are allowed".to_string(),
            });
        }
        if !(MIN_HOURLY_RATE..=MAX_HOURLY_RATE).contains(&hourly_rate) {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!(
                    "{} outside allowed range [{}, {}]",
                    hourly_rate, MIN_HOURLY_RATE, MAX_HOURLY_RATE
                ),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            hourly_rate,
            work_entries: Vec::new(),
            total_pay: Decimal::ZERO,
        })
    }

    /// The employee's unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// The work entries in insertion order.
    pub fn work_entries(&self) -> &[WorkEntry] {
        &self.work_entries
    }

    /// The running total of all daily pay ever added.
    pub fn total_pay(&self) -> Decimal {
        self.total_pay
    }

    /// Validates, classifies, prices and records one day of work.
    ///
    /// On success the new entry is appended and the running total grows by
    /// its daily pay. On a validation failure nothing changes: no entry is
    /// appended and the total keeps its value.
    ///
    /// `today` is the wall-clock date at validation time; the caller
    /// supplies it so the future-date and current-year rules track the
    /// moment of insertion.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`](crate::error::ValidationError)
    /// variant (wrapped in [`EngineError::WorkDate`]) describing which rule
    /// rejected the date.
    pub fn add_work_entry(
        &mut self,
        work_date: NaiveDate,
        hours_worked: Decimal,
        calendar: &HolidayCalendar,
        today: NaiveDate,
    ) -> EngineResult<WorkEntry> {
        validate_work_date(
            work_date,
            self.work_entries.iter().map(|entry| entry.work_date),
            today,
        )?;

        let day_class = calendar.classify(work_date);
        let daily_pay = compute_daily_pay(self.hourly_rate, hours_worked, day_class);

        let entry = WorkEntry {
            work_date,
            hours_worked,
            day_class,
            daily_pay,
        };
        self.work_entries.push(entry);
        self.total_pay += daily_pay;

        Ok(entry)
    }

    /// Produces the pay report for this employee.
    ///
    /// One row per entry in insertion order, followed by the accumulated
    /// total. Intended for a display collaborator; contains no formatting.
    pub fn report(&self) -> PayReport {
        PayReport {
            employee_id: self.id,
            employee_name: self.name.clone(),
            hourly_rate: self.hourly_rate,
            entries: self
                .work_entries
                .iter()
                .map(|entry| PayReportRow {
                    work_date: entry.work_date,
                    day_class: entry.day_class,
                    hours_worked: entry.hours_worked,
                    daily_pay: entry.daily_pay,
                })
                .collect(),
            total_pay: self.total_pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DayClass;
    use crate::config::HolidayConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn calendar() -> HolidayCalendar {
        HolidayCalendar::for_year(&HolidayConfig::alberta(), 2026)
    }

    // 2026-08-06 is a Thursday
    fn today() -> NaiveDate {
        date("2026-08-06")
    }

    fn create_employee(rate: &str) -> Employee {
        Employee::new("Dana O'Neil", dec(rate)).unwrap()
    }

    #[test]
    fn test_new_employee_starts_empty() {
        let employee = create_employee("20");
        assert_eq!(employee.name(), "Dana O'Neil");
        assert_eq!(employee.hourly_rate(), dec("20"));
        assert!(employee.work_entries().is_empty());
        assert_eq!(employee.total_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_names_with_hyphens_and_apostrophes_accepted() {
        assert!(Employee::new("Mary-Jane O'Brien", dec("20")).is_ok());
        assert!(Employee::new("Anne Marie", dec("20")).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Employee::new("   ", dec("20"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_name_with_digits_rejected() {
        let result = Employee::new("Agent 99", dec("20"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_name_with_punctuation_rejected() {
        assert!(Employee::new("R. Daneel", dec("20")).is_err());
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        assert!(Employee::new("Ada", dec("1.0")).is_ok());
        assert!(Employee::new("Ada", dec("100.0")).is_ok());
    }

    #[test]
    fn test_rate_below_minimum_rejected() {
        let result = Employee::new("Ada", dec("0.99"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "hourly_rate"
        ));
    }

    #[test]
    fn test_rate_above_maximum_rejected() {
        let result = Employee::new("Ada", dec("100.01"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "hourly_rate"
        ));
    }

    #[test]
    fn test_add_entry_on_weekday() {
        let mut employee = create_employee("20");
        let entry = employee
            .add_work_entry(date("2026-08-03"), dec("8"), &calendar(), today())
            .unwrap();

        assert_eq!(entry.day_class, DayClass::Regular);
        assert_eq!(entry.daily_pay, dec("165.00"));
        assert_eq!(employee.work_entries().len(), 1);
        assert_eq!(employee.total_pay(), dec("165.00"));
    }

    #[test]
    fn test_add_entry_on_weekend() {
        // 2026-08-01 is a Saturday
        let mut employee = create_employee("20");
        let entry = employee
            .add_work_entry(date("2026-08-01"), dec("8"), &calendar(), today())
            .unwrap();

        assert_eq!(entry.day_class, DayClass::Weekend);
        assert_eq!(entry.daily_pay, dec("240.00"));
    }

    #[test]
    fn test_add_entry_on_holiday() {
        // Canada Day 2026 falls on a Wednesday
        let mut employee = create_employee("20");
        let entry = employee
            .add_work_entry(date("2026-07-01"), dec("8"), &calendar(), today())
            .unwrap();

        assert_eq!(entry.day_class, DayClass::Holiday);
        assert_eq!(entry.daily_pay, dec("240.00"));
    }

    #[test]
    fn test_total_accumulates_exactly() {
        let mut employee = create_employee("20");
        let d1 = employee
            .add_work_entry(date("2026-08-03"), dec("8"), &calendar(), today())
            .unwrap()
            .daily_pay;
        let d2 = employee
            .add_work_entry(date("2026-08-01"), dec("6.5"), &calendar(), today())
            .unwrap()
            .daily_pay;

        assert_eq!(employee.total_pay(), d1 + d2);
    }

    #[test]
    fn test_duplicate_date_leaves_state_unchanged() {
        let mut employee = create_employee("20");
        employee
            .add_work_entry(date("2026-08-03"), dec("8"), &calendar(), today())
            .unwrap();
        let total_before = employee.total_pay();

        let result = employee.add_work_entry(date("2026-08-03"), dec("4"), &calendar(), today());

        assert!(matches!(
            result,
            Err(EngineError::WorkDate(
                crate::error::ValidationError::DuplicateDate { .. }
            ))
        ));
        assert_eq!(employee.work_entries().len(), 1);
        assert_eq!(employee.total_pay(), total_before);
    }

    #[test]
    fn test_future_date_rejected() {
        let mut employee = create_employee("20");
        let result = employee.add_work_entry(date("2026-08-07"), dec("8"), &calendar(), today());

        assert!(matches!(
            result,
            Err(EngineError::WorkDate(
                crate::error::ValidationError::FutureDate { .. }
            ))
        ));
        assert!(employee.work_entries().is_empty());
        assert_eq!(employee.total_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_wrong_year_rejected_regardless_of_class() {
        let mut employee = create_employee("20");

        // A past weekday, weekend, and holiday from the previous year
        for candidate in ["2025-08-04", "2025-08-02", "2025-07-01"] {
            let result =
                employee.add_work_entry(date(candidate), dec("8"), &calendar(), today());
            assert!(
                matches!(
                    result,
                    Err(EngineError::WorkDate(
                        crate::error::ValidationError::WrongYear { .. }
                    ))
                ),
                "expected WrongYear for {}",
                candidate
            );
        }
        assert!(employee.work_entries().is_empty());
    }

    #[test]
    fn test_entries_keep_insertion_order_not_date_order() {
        let mut employee = create_employee("20");
        employee
            .add_work_entry(date("2026-08-03"), dec("8"), &calendar(), today())
            .unwrap();
        employee
            .add_work_entry(date("2026-08-01"), dec("6"), &calendar(), today())
            .unwrap();

        let dates: Vec<NaiveDate> = employee
            .work_entries()
            .iter()
            .map(|e| e.work_date)
            .collect();
        assert_eq!(dates, vec![date("2026-08-03"), date("2026-08-01")]);
    }

    #[test]
    fn test_report_mirrors_entries_and_total() {
        let mut employee = create_employee("20");
        employee
            .add_work_entry(date("2026-08-03"), dec("8"), &calendar(), today())
            .unwrap();
        employee
            .add_work_entry(date("2026-08-01"), dec("6"), &calendar(), today())
            .unwrap();

        let report = employee.report();
        assert_eq!(report.employee_id, employee.id());
        assert_eq!(report.employee_name, "Dana O'Neil");
        assert_eq!(report.hourly_rate, dec("20"));
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].work_date, date("2026-08-03"));
        assert_eq!(report.entries[0].day_class, DayClass::Regular);
        assert_eq!(report.entries[1].day_class, DayClass::Weekend);
        assert_eq!(report.total_pay, dec("345.00")); // 165 + 180
    }

    #[test]
    fn test_ids_are_unique() {
        let a = create_employee("20");
        let b = create_employee("20");
        assert_ne!(a.id(), b.id());
    }
}
