//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday_calendar;
mod pay_report;
mod work_entry;

pub use employee::{Employee, MAX_HOURLY_RATE, MIN_HOURLY_RATE};
pub use holiday_calendar::HolidayCalendar;
pub use pay_report::{PayReport, PayReportRow};
pub use work_entry::{MAX_DAILY_HOURS, MIN_DAILY_HOURS, WorkEntry};
