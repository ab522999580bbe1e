//! Error types for the Workday Calendar.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calendar, its configuration, and the holiday store
//! can report.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The direction a working-day search walks the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Searching later dates.
    Forward,
    /// Searching earlier dates.
    Backward,
}

impl std::fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDirection::Forward => write!(f, "forward"),
            SearchDirection::Backward => write!(f, "backward"),
        }
    }
}

/// The main error type for the Workday Calendar.
///
/// # Example
///
/// ```
/// use workday_calendar::error::CalendarError;
///
/// let error = CalendarError::ConfigNotFound {
///     path: "/missing/workday.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/workday.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the calendar cannot work with.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending value.
        message: String,
    },

    /// A calculation request failed validation.
    #[error("Validation failed: {}", .messages.join(" "))]
    Validation {
        /// Every validation message collected for the request.
        messages: Vec<String>,
    },

    /// No working day exists within the bounded search window.
    #[error("No working day found searching {direction} from {from} within {searched_days} days")]
    NoWorkingDayFound {
        /// The date the search started from.
        from: NaiveDate,
        /// Which way the search walked.
        direction: SearchDirection,
        /// How many candidate days were examined.
        searched_days: u32,
    },

    /// The arithmetic loop did not converge within its iteration cap.
    #[error("Workday calculation did not converge after {iterations} iterations")]
    IterationLimitExceeded {
        /// The number of iterations performed.
        iterations: usize,
    },

    /// A date step ran past the representable calendar range.
    #[error("Date out of range stepping from {date}")]
    DateOutOfRange {
        /// The last representable date reached.
        date: NaiveDate,
    },

    /// No holiday exists with the given identifier.
    #[error("Holiday not found: {id}")]
    HolidayNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },

    /// A holiday with the same date and name (or the same id) already exists.
    #[error("Holiday '{name}' on {date} already exists")]
    DuplicateHoliday {
        /// The holiday name.
        name: String,
        /// The holiday date.
        date: NaiveDate,
    },

    /// A holiday was submitted with every identifying field unset.
    #[error("Holiday has incomplete or empty values")]
    EmptyHoliday,
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;
