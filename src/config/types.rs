//! Configuration types for the workday calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::WeekendDays;
use crate::models::WorkingWindow;

/// Default result format, matching ISO-8601 without fractional seconds.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl ServerSettings {
    /// Returns `host:port`, suitable for binding a listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Calendar-wide settings.
///
/// Passed explicitly to every calculation; nothing reads configuration from
/// global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkdaySettings {
    /// Weekdays that are never working days (0 = Sunday).
    pub weekend_days: WeekendDays,
    /// Working window used when a request leaves its hours unset.
    pub working_hours: WorkingWindow,
    /// strftime pattern used to format calculation results.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// HTTP server address.
    #[serde(default)]
    pub server: ServerSettings,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for WorkdaySettings {
    /// Saturday/Sunday weekend, 08:00-16:00, ISO-8601 results.
    fn default() -> Self {
        Self {
            weekend_days: WeekendDays::saturday_sunday(),
            working_hours: WorkingWindow::new(
                NaiveTime::from_hms_opt(8, 0, 0).expect("Valid start time"),
                NaiveTime::from_hms_opt(16, 0, 0).expect("Valid end time"),
            ),
            date_format: default_date_format(),
            server: ServerSettings::default(),
        }
    }
}
