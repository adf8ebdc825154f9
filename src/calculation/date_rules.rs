//! Business-rule validation for candidate work dates.
//!
//! This module provides the pure classifier that decides whether a work
//! date may be recorded against an employee's existing entries.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Validates a candidate work date against the business rules.
///
/// The rules are checked strictly in this order:
///
/// 1. [`ValidationError::FutureDate`] if `candidate` is strictly after
///    `today`.
/// 2. [`ValidationError::WrongYear`] if `candidate` is not in `today`'s
///    calendar year. `today` is the wall-clock date at validation time, so
///    the same candidate can be accepted or rejected depending on when
///    validation runs relative to a year boundary.
/// 3. [`ValidationError::DuplicateDate`] if any existing entry carries the
///    exact same date.
///
/// The function has no side effects; the caller decides how to recover
/// (typically by asking for a different date).
///
/// # Arguments
///
/// * `candidate` - The work date to validate
/// * `existing_dates` - The dates of the employee's existing work entries
/// * `today` - The current date at validation time
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::validate_work_date;
/// use payroll_engine::error::ValidationError;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
/// let candidate = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
///
/// assert!(validate_work_date(candidate, [], today).is_ok());
/// assert_eq!(
///     validate_work_date(candidate, [candidate], today),
///     Err(ValidationError::DuplicateDate { date: candidate }),
/// );
/// ```
pub fn validate_work_date(
    candidate: NaiveDate,
    existing_dates: impl IntoIterator<Item = NaiveDate>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if candidate > today {
        return Err(ValidationError::FutureDate {
            date: candidate,
            today,
        });
    }

    if candidate.year() != today.year() {
        return Err(ValidationError::WrongYear {
            date: candidate,
            current_year: today.year(),
        });
    }

    if existing_dates.into_iter().any(|date| date == candidate) {
        return Err(ValidationError::DuplicateDate { date: candidate });
    }

    Ok(())
}
