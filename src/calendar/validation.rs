//! Request validation.
//!
//! Checks a [`WorkdayCalculation`] before it reaches the arithmetic loop and
//! collects every problem found, so a caller can report them all at once.

use chrono::NaiveDateTime;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{WorkdayCalculation, WorkingWindow, zero_date_time};

/// The start instant was left at its zero value.
pub const INVALID_START: &str = "StartDateTime must be a valid DateTime.";

/// The start instant lies after the current time.
pub const START_IN_FUTURE: &str = "StartDateTime cannot be in the future.";

/// The request carried no holiday list.
pub const MISSING_HOLIDAYS: &str = "Holidays list cannot be null.";

/// A holiday date was left at its zero value.
pub const INVALID_HOLIDAY_DATE: &str = "Holiday Date must be a valid Date.";

/// The working window ends at or before its start, as sent or once resolved.
pub const END_BEFORE_START: &str = "Working End time must be after Start time.";

/// The day delta is NaN or infinite.
pub const NON_FINITE_DAYS: &str = "WorkingDays must be a finite number.";

/// Validates a calculation request.
///
/// The window check runs twice. Bounds sent together must be ordered as sent,
/// so `10:00`-`00:00` fails even though midnight later resolves to the
/// default. Then the window resolved against `defaults` must be ordered too,
/// which catches an override that leaves one bound unset. `now` is supplied
/// by the caller.
///
/// # Errors
///
/// Returns [`CalendarError::Validation`] listing every failed check.
pub fn validate_request(
    request: &WorkdayCalculation,
    defaults: &WorkingWindow,
    now: NaiveDateTime,
) -> CalendarResult<()> {
    let mut messages = Vec::new();

    if request.start_date_time == zero_date_time() {
        messages.push(INVALID_START.to_string());
    } else if request.start_date_time > now {
        messages.push(START_IN_FUTURE.to_string());
    }

    match &request.holidays {
        None => messages.push(MISSING_HOLIDAYS.to_string()),
        Some(holidays) => {
            if holidays.iter().any(|holiday| holiday.has_zero_date()) {
                messages.push(INVALID_HOLIDAY_DATE.to_string());
            }
        }
    }

    let inverted_as_sent = request
        .working_hours
        .is_some_and(|hours| hours.is_inverted());
    if inverted_as_sent || !request.working_window(defaults).is_valid() {
        messages.push(END_BEFORE_START.to_string());
    }

    if !request.working_days.is_finite() {
        messages.push(NON_FINITE_DAYS.to_string());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(CalendarError::Validation { messages })
    }
}
