//! Configuration types for statutory holidays.
//!
//! This module contains the strongly-typed holiday definitions that are
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// A statutory holiday as a literal (month, day) pair.
///
/// Holidays are defined year-independently and resolved against a target
/// year when a calendar is built. Observance rules such as "third Monday of
/// February" are out of scope: each holiday is a fixed calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// The month of the holiday (1-12).
    pub month: u32,
    /// The day of the month (1-31).
    pub day: u32,
    /// The name of the holiday (e.g., "Canada Day").
    pub name: String,
}

/// A set of statutory holiday definitions for one region.
///
/// # Example
///
/// ```
/// use payroll_engine::config::HolidayConfig;
///
/// let config = HolidayConfig::alberta();
/// assert_eq!(config.region, "Alberta");
/// assert!(config.holidays.iter().any(|h| h.name == "Canada Day"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayConfig {
    /// The region these holidays apply to (e.g., "Alberta").
    pub region: String,
    /// The holiday definitions.
    pub holidays: Vec<HolidayRule>,
}

impl HolidayConfig {
    /// Returns the built-in Alberta statutory holiday list.
    ///
    /// This is the default calendar used when no configuration file is
    /// supplied. It includes the general holidays plus the optional ones
    /// commonly observed by Alberta employers.
    pub fn alberta() -> Self {
        let holidays = [
            (1, 1, "New Year's Day"),
            (2, 19, "Alberta Family Day"),
            (3, 29, "Good Friday"),
            (4, 1, "Easter Monday"),
            (5, 20, "Victoria Day"),
            (7, 1, "Canada Day"),
            (8, 5, "Heritage Day"),
            (9, 2, "Labour Day"),
            (9, 30, "National Day for Truth and Reconciliation"),
            (10, 14, "Thanksgiving Day"),
            (11, 11, "Remembrance Day"),
            (12, 25, "Christmas Day"),
            (12, 26, "Boxing Day"),
        ];

        Self {
            region: "Alberta".to_string(),
            holidays: holidays
                .into_iter()
                .map(|(month, day, name)| HolidayRule {
                    month,
                    day,
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alberta_has_thirteen_holidays() {
        let config = HolidayConfig::alberta();
        assert_eq!(config.holidays.len(), 13);
    }

    #[test]
    fn test_alberta_includes_new_years_day() {
        let config = HolidayConfig::alberta();
        let new_years = config
            .holidays
            .iter()
            .find(|h| h.name == "New Year's Day")
            .expect("New Year's Day missing");
        assert_eq!(new_years.month, 1);
        assert_eq!(new_years.day, 1);
    }

    #[test]
    fn test_alberta_rules_are_well_formed() {
        let config = HolidayConfig::alberta();
        for rule in &config.holidays {
            assert!((1..=12).contains(&rule.month), "bad month in {:?}", rule);
            assert!((1..=31).contains(&rule.day), "bad day in {:?}", rule);
            assert!(!rule.name.is_empty());
        }
    }

    #[test]
    fn test_deserialize_holiday_config() {
        let yaml = r#"
region: "Testland"
holidays:
  - month: 1
    day: 1
    name: "New Year's Day"
  - month: 12
    day: 25
    name: "Christmas Day"
"#;
        let config: HolidayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.region, "Testland");
        assert_eq!(config.holidays.len(), 2);
        assert_eq!(config.holidays[1].month, 12);
        assert_eq!(config.holidays[1].day, 25);
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = HolidayConfig::alberta();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: HolidayConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
