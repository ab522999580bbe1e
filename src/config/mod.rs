//! Configuration loading and management for the Workday Calendar.
//!
//! This module loads calendar settings from a YAML file: the weekend
//! definition, default working hours, the result date format, and the HTTP
//! server address.
//!
//! # Example
//!
//! ```no_run
//! use workday_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/workday.yaml").unwrap();
//! println!("Default hours: {:?}", config.default_working_hours());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{DEFAULT_DATE_FORMAT, ServerSettings, WorkdaySettings};
