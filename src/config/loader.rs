//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calendar
//! settings from a YAML file.

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calendar::WeekendDays;
use crate::error::{CalendarError, CalendarResult};
use crate::models::WorkingWindow;

use super::types::WorkdaySettings;

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "WORKDAY_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./config/workday.yaml";

/// Loads and provides access to calendar settings.
///
/// # File Format
///
/// ```text
/// weekend_days: [0, 6]          # 0 = Sunday ... 6 = Saturday
/// working_hours:
///   start: "08:00:00"
///   end: "16:00:00"
/// date_format: "%Y-%m-%dT%H:%M:%S"
/// server:                        # optional
///   host: "127.0.0.1"
///   port: 8080
/// ```
///
/// # Example
///
/// ```no_run
/// use workday_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/workday.yaml").unwrap();
/// println!("Weekend: {:?}", loader.weekend_days().indices());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: WorkdaySettings,
}

impl ConfigLoader {
    /// Loads settings from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable ([`CalendarError::ConfigNotFound`])
    /// - The file is not valid YAML for the settings shape ([`CalendarError::ConfigParseError`])
    /// - The values fail validation ([`CalendarError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: WorkdaySettings =
            serde_yaml::from_str(&content).map_err(|e| CalendarError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_settings(settings)?;
        debug!(
            path = %path_str,
            weekend_days = ?loader.settings.weekend_days.indices(),
            "Loaded workday configuration"
        );
        Ok(loader)
    }

    /// Loads settings from `WORKDAY_CONFIG`, falling back to
    /// [`DEFAULT_CONFIG_PATH`].
    pub fn from_env() -> CalendarResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::load(path)
    }

    /// Builds a loader from in-memory settings, applying the same validation
    /// as [`ConfigLoader::load`].
    pub fn from_settings(settings: WorkdaySettings) -> CalendarResult<Self> {
        validate(&settings)?;
        Ok(Self { settings })
    }

    /// Returns the full settings.
    pub fn settings(&self) -> &WorkdaySettings {
        &self.settings
    }

    /// Returns the configured weekend days.
    pub fn weekend_days(&self) -> &WeekendDays {
        &self.settings.weekend_days
    }

    /// Returns the working window applied when a request leaves hours unset.
    pub fn default_working_hours(&self) -> &WorkingWindow {
        &self.settings.working_hours
    }

    /// Formats a result instant with the configured date format.
    pub fn format_result(&self, instant: NaiveDateTime) -> String {
        instant.format(&self.settings.date_format).to_string()
    }
}

fn validate(settings: &WorkdaySettings) -> CalendarResult<()> {
    if settings.weekend_days.covers_whole_week() {
        return Err(CalendarError::InvalidConfig {
            message: "weekend_days cannot cover all seven days".to_string(),
        });
    }

    if !settings.working_hours.is_valid() {
        return Err(CalendarError::InvalidConfig {
            message: format!(
                "working_hours end {} must be after start {}",
                settings.working_hours.end, settings.working_hours.start
            ),
        });
    }

    if settings.date_format.is_empty()
        || StrftimeItems::new(&settings.date_format).any(|item| matches!(item, Item::Error))
    {
        return Err(CalendarError::InvalidConfig {
            message: format!("date_format '{}' is not a valid pattern", settings.date_format),
        });
    }

    Ok(())
}
