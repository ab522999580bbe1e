//! Working-hours models.
//!
//! [`WorkingHours`] is what a caller may send: either bound can be left out.
//! [`WorkingWindow`] is the fully resolved `[start, end)` interval the
//! arithmetic runs against.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Resolved daily working window `[start, end)`.
///
/// # Example
///
/// ```
/// use workday_calendar::models::WorkingWindow;
/// use chrono::NaiveTime;
///
/// let window = WorkingWindow::new(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// );
/// assert!(window.is_valid());
/// assert_eq!(window.span_hours(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    /// Start of the working day.
    pub start: NaiveTime,
    /// End of the working day (exclusive).
    pub end: NaiveTime,
}

impl WorkingWindow {
    /// Creates a window from its bounds.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `end` is strictly after `start`.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Length of the window in hours.
    pub fn span_hours(&self) -> f64 {
        self.end.signed_duration_since(self.start).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Returns `true` if the instant's time-of-day lies within `[start, end)`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        let time = instant.time();
        time >= self.start && time < self.end
    }
}

/// Caller-supplied working-hours override.
///
/// A bound that is absent, or set to midnight, falls back to the configured
/// default when resolved. Midnight therefore cannot be requested explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Requested start of the working day.
    #[serde(default)]
    pub start: Option<NaiveTime>,
    /// Requested end of the working day.
    #[serde(default)]
    pub end: Option<NaiveTime>,
}

impl WorkingHours {
    /// Creates an override with both bounds set.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Fills unset bounds from `defaults`.
    ///
    /// # Example
    ///
    /// ```
    /// use workday_calendar::models::{WorkingHours, WorkingWindow};
    /// use chrono::NaiveTime;
    ///
    /// let defaults = WorkingWindow::new(
    ///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
    /// );
    /// let requested = WorkingHours {
    ///     start: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
    ///     end: Some(NaiveTime::MIN),
    /// };
    ///
    /// let window = requested.resolve(&defaults);
    /// assert_eq!(window.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    /// assert_eq!(window.end, defaults.end);
    /// ```
    pub fn resolve(&self, defaults: &WorkingWindow) -> WorkingWindow {
        WorkingWindow {
            start: explicit(self.start).unwrap_or(defaults.start),
            end: explicit(self.end).unwrap_or(defaults.end),
        }
    }

    /// Returns `true` if both bounds were sent and `end` is not after `start`.
    ///
    /// Compares the values as sent, so an end of midnight counts against a
    /// later start. Midnight on both bounds is an unset override and never
    /// inverted.
    pub fn is_inverted(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start == NaiveTime::MIN && end == NaiveTime::MIN => false,
            (Some(start), Some(end)) => end <= start,
            _ => false,
        }
    }
}

fn explicit(bound: Option<NaiveTime>) -> Option<NaiveTime> {
    bound.filter(|time| *time != NaiveTime::MIN)
}
