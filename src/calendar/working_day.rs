//! Working-day detection.
//!
//! This module decides whether a calendar date is a working day: its weekday
//! must not be a configured weekend day, and no holiday may fall on it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::Holiday;

/// Returns the weekday index used in configuration, counting from
/// Sunday (0) to Saturday (6).
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// The set of weekdays that are never working days.
///
/// Serialized as a list of weekday indices where 0 is Sunday and 6 is
/// Saturday.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::WeekendDays;
/// use chrono::Weekday;
///
/// let weekend = WeekendDays::from_indices(&[0, 6]).unwrap();
/// assert!(weekend.contains(Weekday::Sat));
/// assert!(weekend.contains(Weekday::Sun));
/// assert!(!weekend.contains(Weekday::Mon));
/// assert_eq!(weekend, WeekendDays::saturday_sunday());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekendDays {
    mask: u8,
}

impl WeekendDays {
    /// Builds a weekend set from weekdays.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days
            .into_iter()
            .fold(0u8, |mask, day| mask | (1 << weekday_index(day)));
        Self { mask }
    }

    /// The common Saturday/Sunday weekend.
    pub fn saturday_sunday() -> Self {
        Self::new([Weekday::Sat, Weekday::Sun])
    }

    /// Builds a weekend set from Sunday-based indices (0-6).
    ///
    /// Returns [`CalendarError::InvalidConfig`] for any index above 6.
    pub fn from_indices(indices: &[u8]) -> Result<Self, CalendarError> {
        let mut mask = 0u8;
        for &index in indices {
            if index > 6 {
                return Err(CalendarError::InvalidConfig {
                    message: format!("weekend day index {} is outside 0-6", index),
                });
            }
            mask |= 1 << index;
        }
        Ok(Self { mask })
    }

    /// Returns `true` if `weekday` is a weekend day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.mask & (1 << weekday_index(weekday)) != 0
    }

    /// The weekend days as sorted Sunday-based indices.
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|index| self.mask & (1 << index) != 0).collect()
    }

    /// Number of weekend days per week.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns `true` if every day of the week is a working weekday.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns `true` if all seven weekdays are weekend days.
    pub fn covers_whole_week(&self) -> bool {
        self.len() == 7
    }
}

impl TryFrom<Vec<u8>> for WeekendDays {
    type Error = CalendarError;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_indices(&indices)
    }
}

impl From<WeekendDays> for Vec<u8> {
    fn from(weekend: WeekendDays) -> Self {
        weekend.indices()
    }
}

/// Determines whether `date` is a working day.
///
/// A date is a working day when its weekday is not in `weekend` and no
/// holiday in `holidays` falls on it. Recurring holidays match on month and
/// day; fixed holidays match the exact date.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::{WeekendDays, is_working_day};
/// use workday_calendar::models::Holiday;
/// use chrono::NaiveDate;
///
/// let weekend = WeekendDays::saturday_sunday();
/// let holidays = vec![Holiday::recurring("Constitution Day", NaiveDate::from_ymd_opt(2004, 5, 17).unwrap())];
///
/// // 2004-05-17 is a Monday, but a recurring holiday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2004, 5, 17).unwrap(), &holidays, &weekend));
/// // 2004-05-18 is a plain Tuesday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2004, 5, 18).unwrap(), &holidays, &weekend));
/// // 2004-05-22 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2004, 5, 22).unwrap(), &[], &weekend));
/// ```
pub fn is_working_day(date: NaiveDate, holidays: &[Holiday], weekend: &WeekendDays) -> bool {
    if weekend.contains(date.weekday()) {
        return false;
    }
    !holidays.iter().any(|holiday| holiday.falls_on(date))
}
