//! Day-boundary stepping.
//!
//! Moves an instant to the start of the next working day, or to the end of
//! the previous one. Searches are bounded so that a calendar with no working
//! days yields [`CalendarError::NoWorkingDayFound`] instead of spinning.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::error::{CalendarError, CalendarResult, SearchDirection};
use crate::models::Holiday;

use super::working_day::{WeekendDays, is_working_day};

/// Maximum number of candidate days examined by a single search.
pub const MAX_WORKING_DAY_SEARCH: u32 = 366;

/// Returns the start of the first working day after `instant`'s date.
///
/// The result is always on a later calendar date than `instant`, with its
/// time-of-day set to `work_start`.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::{WeekendDays, next_working_day_start};
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// // Friday evening rolls over the weekend to Monday morning
/// let friday = "2004-05-21T17:30:00".parse::<NaiveDateTime>().unwrap();
/// let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
///
/// let next = next_working_day_start(friday, &[], &WeekendDays::saturday_sunday(), start).unwrap();
/// assert_eq!(next, "2004-05-24T08:00:00".parse::<NaiveDateTime>().unwrap());
/// ```
pub fn next_working_day_start(
    instant: NaiveDateTime,
    holidays: &[Holiday],
    weekend: &WeekendDays,
    work_start: NaiveTime,
) -> CalendarResult<NaiveDateTime> {
    let date = search(instant.date(), holidays, weekend, SearchDirection::Forward)?;
    Ok(date.and_time(work_start))
}

/// Returns the end of the last working day before `instant`'s date.
///
/// The result is always on an earlier calendar date than `instant`, with its
/// time-of-day set to `work_end`.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::{WeekendDays, previous_working_day_end};
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// // Monday morning steps back over the weekend to Friday evening
/// let monday = "2004-05-24T08:00:00".parse::<NaiveDateTime>().unwrap();
/// let end = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
///
/// let previous = previous_working_day_end(monday, &[], &WeekendDays::saturday_sunday(), end).unwrap();
/// assert_eq!(previous, "2004-05-21T16:00:00".parse::<NaiveDateTime>().unwrap());
/// ```
pub fn previous_working_day_end(
    instant: NaiveDateTime,
    holidays: &[Holiday],
    weekend: &WeekendDays,
    work_end: NaiveTime,
) -> CalendarResult<NaiveDateTime> {
    let date = search(instant.date(), holidays, weekend, SearchDirection::Backward)?;
    Ok(date.and_time(work_end))
}

fn search(
    from: NaiveDate,
    holidays: &[Holiday],
    weekend: &WeekendDays,
    direction: SearchDirection,
) -> CalendarResult<NaiveDate> {
    let mut candidate = from;
    for _ in 0..MAX_WORKING_DAY_SEARCH {
        let stepped = match direction {
            SearchDirection::Forward => candidate.succ_opt(),
            SearchDirection::Backward => candidate.pred_opt(),
        };
        candidate = stepped.ok_or(CalendarError::DateOutOfRange { date: candidate })?;

        if is_working_day(candidate, holidays, weekend) {
            return Ok(candidate);
        }
    }

    warn!(
        from = %from,
        direction = %direction,
        searched_days = MAX_WORKING_DAY_SEARCH,
        "No working day found within search window"
    );
    Err(CalendarError::NoWorkingDayFound {
        from,
        direction,
        searched_days: MAX_WORKING_DAY_SEARCH,
    })
}
