//! Day classification for premium pay.
//!
//! This module defines the closed set of day classes the pricing logic
//! branches on. Classification itself lives on
//! [`HolidayCalendar`](crate::models::HolidayCalendar), which combines
//! holiday-set membership with the day of the week.

use serde::{Deserialize, Serialize};

/// The classification of a work date for pay purposes.
///
/// Holiday takes precedence over Weekend: a statutory holiday that falls on
/// a Saturday or Sunday is classified [`DayClass::Holiday`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayClass;
///
/// let class = DayClass::Weekend;
/// assert_eq!(class.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// A statutory holiday. The whole day is paid at the premium rate.
    Holiday,
    /// Saturday or Sunday. The whole day is paid at the premium rate.
    Weekend,
    /// An ordinary weekday. Only hours beyond the overtime threshold earn
    /// the premium rate.
    Regular,
}

impl DayClass {
    /// Returns true if this class attracts the holiday/weekend premium.
    pub fn is_premium(self) -> bool {
        matches!(self, DayClass::Holiday | DayClass::Weekend)
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Holiday => write!(f, "Holiday"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Regular => write!(f, "Regular"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_class_display() {
        assert_eq!(format!("{}", DayClass::Holiday), "Holiday");
        assert_eq!(format!("{}", DayClass::Weekend), "Weekend");
        assert_eq!(format!("{}", DayClass::Regular), "Regular");
    }

    #[test]
    fn test_day_class_serialization() {
        assert_eq!(
            serde_json::to_string(&DayClass::Holiday).unwrap(),
            "\"holiday\""
        );
        assert_eq!(
            serde_json::to_string(&DayClass::Weekend).unwrap(),
            "\"weekend\""
        );
        assert_eq!(
            serde_json::to_string(&DayClass::Regular).unwrap(),
            "\"regular\""
        );

        let deserialized: DayClass = serde_json::from_str("\"weekend\"").unwrap();
        assert_eq!(deserialized, DayClass::Weekend);
    }

    #[test]
    fn test_premium_classes() {
        assert!(DayClass::Holiday.is_premium());
        assert!(DayClass::Weekend.is_premium());
        assert!(!DayClass::Regular.is_premium());
    }
}
