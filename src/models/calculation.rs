//! Workday calculation request and result models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Holiday, WorkingHours, WorkingWindow};

/// A request to move `start_date_time` by `working_days`.
///
/// Positive day counts move forward, negative ones move backward. One day
/// equals eight working hours regardless of the working window.
///
/// # Example
///
/// ```
/// use workday_calendar::models::WorkdayCalculation;
/// use chrono::NaiveDateTime;
///
/// let request = WorkdayCalculation {
///     start_date_time: "2004-05-24T15:07:00".parse::<NaiveDateTime>().unwrap(),
///     working_days: 0.25,
///     holidays: Some(vec![]),
///     working_hours: None,
/// };
/// assert!(request.holiday_list().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkdayCalculation {
    /// The instant to start from.
    pub start_date_time: NaiveDateTime,
    /// Signed number of working days to move.
    pub working_days: f64,
    /// Holidays to skip. `None` means the caller sent no list at all.
    pub holidays: Option<Vec<Holiday>>,
    /// Optional working-hours override.
    pub working_hours: Option<WorkingHours>,
}

impl WorkdayCalculation {
    /// Returns the holidays, treating an absent list as empty.
    pub fn holiday_list(&self) -> &[Holiday] {
        self.holidays.as_deref().unwrap_or(&[])
    }

    /// Resolves the working window against configured defaults.
    pub fn working_window(&self, defaults: &WorkingWindow) -> WorkingWindow {
        self.working_hours.unwrap_or_default().resolve(defaults)
    }
}

/// The outcome of a successful workday calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkdayCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The requested start instant.
    pub start_date_time: NaiveDateTime,
    /// The requested day delta.
    pub working_days: f64,
    /// The working window the calculation actually used.
    pub working_hours: WorkingWindow,
    /// The resulting instant, formatted with the configured date format.
    pub result: String,
    /// The resulting instant.
    pub result_date_time: NaiveDateTime,
    /// Time spent calculating, in microseconds.
    pub duration_us: u64,
}
