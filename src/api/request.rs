//! Request types for the Workday Calendar API.
//!
//! This module defines the JSON request bodies for the calculation and
//! holiday endpoints. Field names are camelCase on the wire.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    Holiday, WorkdayCalculation, WorkingHours, deserialize_calendar_date, zero_date,
    zero_date_time,
};

/// Request body for `POST /workday/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkdayCalculationRequest {
    /// The instant to start from. Left at the zero value when absent.
    #[serde(default = "zero_date_time")]
    pub start_date_time: NaiveDateTime,
    /// Signed number of working days to move.
    pub working_days: f64,
    /// Holidays to skip. `null` fails validation.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayRequest>>,
    /// Optional working-hours override.
    #[serde(default)]
    pub working_hours: Option<WorkingHours>,
}

/// Holiday information in a request body.
///
/// `date` accepts `YYYY-MM-DD` or a full naive datetime, whose time is
/// dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRequest {
    /// Identifier; nil or absent means "assign one".
    #[serde(default)]
    pub id: Uuid,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The holiday date.
    #[serde(default = "zero_date", deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    /// Whether the holiday recurs every year.
    #[serde(default)]
    pub is_recurring: bool,
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            id: req.id,
            name: req.name,
            date: req.date,
            is_recurring: req.is_recurring,
        }
    }
}

impl From<WorkdayCalculationRequest> for WorkdayCalculation {
    fn from(req: WorkdayCalculationRequest) -> Self {
        WorkdayCalculation {
            start_date_time: req.start_date_time,
            working_days: req.working_days,
            holidays: req
                .holidays
                .map(|holidays| holidays.into_iter().map(Into::into).collect()),
            working_hours: req.working_hours,
        }
    }
}
