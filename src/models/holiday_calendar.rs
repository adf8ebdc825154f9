//! Statutory holiday calendar.
//!
//! This module defines the [`HolidayCalendar`], which resolves the
//! year-independent holiday rules from a [`HolidayConfig`] into concrete
//! dates for one target year and classifies any date for pay purposes.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calculation::DayClass;
use crate::config::HolidayConfig;

/// The set of statutory holiday dates for one target year.
///
/// The set is built once at construction; classification afterwards is a
/// membership test plus the day of the week. The calendar is a shared,
/// read-only value consulted by the pricing pipeline and owns no employee
/// data.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayClass;
/// use payroll_engine::config::HolidayConfig;
/// use payroll_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::for_year(&HolidayConfig::alberta(), 2026);
///
/// // 2026-07-01 is Canada Day
/// let canada_day = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
/// assert!(calendar.is_holiday(canada_day));
/// assert_eq!(calendar.classify(canada_day), DayClass::Holiday);
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(calendar.classify(saturday), DayClass::Weekend);
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    year: i32,
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds the calendar for `year` from the given holiday definitions.
    ///
    /// Each (month, day) rule is resolved against the target year. A rule
    /// that does not name a real date in that year (Feb 29 outside a leap
    /// year) resolves to no holiday.
    pub fn for_year(config: &HolidayConfig, year: i32) -> Self {
        let holidays = config
            .holidays
            .iter()
            .filter_map(|rule| NaiveDate::from_ymd_opt(year, rule.month, rule.day))
            .collect();

        Self { year, holidays }
    }

    /// The year this calendar was built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true iff `date` is in the holiday set.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Classifies a date for pay purposes.
    ///
    /// Holiday takes precedence over Weekend: a holiday falling on a
    /// Saturday or Sunday is classified [`DayClass::Holiday`]. A date
    /// outside the target year still classifies by set membership and day
    /// of week; there are no failure modes.
    pub fn classify(&self, date: NaiveDate) -> DayClass {
        if self.is_holiday(date) {
            return DayClass::Holiday;
        }
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayClass::Weekend,
            _ => DayClass::Regular,
        }
    }
}
