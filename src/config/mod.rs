//! Holiday configuration for the payroll engine.
//!
//! This module provides functionality to load statutory holiday definitions
//! from a YAML file, along with the built-in Alberta statutory list used
//! when no file is supplied.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/holidays/alberta.yaml").unwrap();
//! println!("Loaded holidays for: {}", config.config().region);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayConfig, HolidayRule};
