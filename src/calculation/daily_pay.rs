//! Daily pay computation.
//!
//! This module provides the pure pricing function that turns an hourly rate,
//! the hours worked in a day, and the day's classification into a daily pay
//! amount.

use rust_decimal::Decimal;

use super::DayClass;

/// Hours in a single day beyond which overtime applies.
pub const OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 1);

/// Multiplier applied to overtime hours and to holiday/weekend days.
pub const OVERTIME_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Computes the pay for a single day of work.
///
/// The hours worked are split at [`OVERTIME_THRESHOLD`] into a regular and
/// an overtime portion. On a [`DayClass::Regular`] day the regular portion
/// is paid at the hourly rate and the overtime portion at
/// [`OVERTIME_RATE`] times the hourly rate. On a holiday or weekend the
/// entire day, overtime portion included, is paid at the single premium
/// rate; overtime is not multiplied on top of the premium.
///
/// Inputs are assumed pre-validated by the caller. The function is pure and
/// deterministic, with no rounding beyond `Decimal` native precision.
///
/// # Arguments
///
/// * `hourly_rate` - The employee's hourly rate
/// * `hours_worked` - The hours worked on this day
/// * `day_class` - The day's classification
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{DayClass, compute_daily_pay};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("20").unwrap();
/// let hours = Decimal::from_str("8").unwrap();
///
/// // 7.5 * 20 + 0.5 * 20 * 1.5 = 165
/// let weekday = compute_daily_pay(rate, hours, DayClass::Regular);
/// assert_eq!(weekday, Decimal::from_str("165").unwrap());
///
/// // (7.5 + 0.5) * 20 * 1.5 = 240
/// let weekend = compute_daily_pay(rate, hours, DayClass::Weekend);
/// assert_eq!(weekend, Decimal::from_str("240").unwrap());
/// ```
pub fn compute_daily_pay(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    day_class: DayClass,
) -> Decimal {
    let regular_hours = hours_worked.min(OVERTIME_THRESHOLD);
    let overtime_hours = (hours_worked - OVERTIME_THRESHOLD).max(Decimal::ZERO);

    match day_class {
        DayClass::Holiday | DayClass::Weekend => {
            (regular_hours + overtime_hours) * hourly_rate * OVERTIME_RATE
        }
        DayClass::Regular => {
            regular_hours * hourly_rate + overtime_hours * hourly_rate * OVERTIME_RATE
        }
    }
}
