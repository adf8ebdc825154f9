//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording work entries
//! and computing pay.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// A recoverable work-date validation outcome.
///
/// These are the three business-rule rejections a candidate work date can
/// receive. None of them is fatal: the caller is expected to submit a
/// different date and retry.
///
/// # Example
///
/// ```
/// use payroll_engine::error::ValidationError;
/// use chrono::NaiveDate;
///
/// let error = ValidationError::DuplicateDate {
///     date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
/// };
/// assert_eq!(error.to_string(), "a work entry for 2026-08-03 already exists");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The candidate date is strictly after today.
    #[error("work date {date} is in the future (today is {today})")]
    FutureDate {
        /// The rejected work date.
        date: NaiveDate,
        /// The current date at validation time.
        today: NaiveDate,
    },

    /// The candidate date falls outside the current calendar year.
    #[error("work date {date} is not in the current year {current_year}")]
    WrongYear {
        /// The rejected work date.
        date: NaiveDate,
        /// The current calendar year at validation time.
        current_year: i32,
    },

    /// The employee already has a work entry for this date.
    #[error("a work entry for {date} already exists")]
    DuplicateDate {
        /// The rejected work date.
        date: NaiveDate,
    },
}

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Holiday configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Holiday configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee field was invalid at construction time.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Hours worked fell outside the allowed daily range.
    #[error("Hours worked {hours} outside allowed range [{min}, {max}]")]
    HoursOutOfRange {
        /// The rejected hours value.
        hours: rust_decimal::Decimal,
        /// The minimum allowed hours per day.
        min: rust_decimal::Decimal,
        /// The maximum allowed hours per day.
        max: rust_decimal::Decimal,
    },

    /// No employee with the given ID exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The unknown employee ID.
        id: Uuid,
    },

    /// A work date was rejected by the validation rules.
    #[error(transparent)]
    WorkDate(#[from] ValidationError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
