//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading holiday
//! definitions from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::HolidayConfig;

/// Loads and provides access to the holiday configuration.
///
/// The `ConfigLoader` reads a YAML holiday file and validates the rules it
/// contains. When no file is available, [`ConfigLoader::builtin`] supplies
/// the Alberta statutory list compiled into the crate.
///
/// # File Format
///
/// ```text
/// region: "Alberta"
/// holidays:
///   - month: 1
///     day: 1
///     name: "New Year's Day"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/holidays/alberta.yaml").unwrap();
/// println!("Holidays: {}", loader.config().holidays.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HolidayConfig,
}

impl ConfigLoader {
    /// Loads holiday configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the holiday file (e.g., "./config/holidays/alberta.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - Any holiday rule has an out-of-range month or day
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/holidays/alberta.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: HolidayConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&config, &path_str)?;

        Ok(Self { config })
    }

    /// Returns a loader wrapping the built-in Alberta statutory list.
    pub fn builtin() -> Self {
        Self {
            config: HolidayConfig::alberta(),
        }
    }

    /// Returns the underlying holiday configuration.
    pub fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Checks every rule for an in-range month and day and a non-empty name.
    fn validate(config: &HolidayConfig, path: &str) -> EngineResult<()> {
        for rule in &config.holidays {
            if !(1..=12).contains(&rule.month) {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("holiday '{}' has invalid month {}", rule.name, rule.month),
                });
            }
            if !(1..=31).contains(&rule.day) {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("holiday '{}' has invalid day {}", rule.name, rule.day),
                });
            }
            if rule.name.trim().is_empty() {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("holiday {}-{} has an empty name", rule.month, rule.day),
                });
            }
        }
        Ok(())
    }
}
