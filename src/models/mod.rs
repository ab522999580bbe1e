//! Core data models for the Workday Calendar.
//!
//! This module contains the domain models shared by the calendar core,
//! the holiday store, and the HTTP API.

mod calculation;
mod holiday;
mod working_hours;

pub use calculation::{WorkdayCalculation, WorkdayCalculationResult};
pub use holiday::{Holiday, parse_calendar_date, zero_date, zero_date_time};
pub(crate) use holiday::deserialize_calendar_date;
pub use working_hours::{WorkingHours, WorkingWindow};
