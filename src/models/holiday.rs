//! Holiday model.
//!
//! This module contains the [`Holiday`] type used both by the workday
//! arithmetic (as the caller-supplied holiday set) and by the holiday store.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Returns the zero date (`0001-01-01`), the value an unset date carries.
pub fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Returns the zero instant (midnight on [`zero_date`]).
pub fn zero_date_time() -> NaiveDateTime {
    zero_date().and_time(NaiveTime::MIN)
}

/// Parses a holiday date from either `YYYY-MM-DD` or a naive ISO-8601
/// datetime. Any time-of-day component is discarded.
///
/// # Example
///
/// ```
/// use workday_calendar::models::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// assert_eq!(parse_calendar_date("2025-12-25").unwrap(), expected);
/// assert_eq!(parse_calendar_date("2025-12-25T09:07:00").unwrap(), expected);
/// assert!(parse_calendar_date("Christmas").is_err());
/// ```
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    raw.parse::<NaiveDateTime>()
        .map(|datetime| datetime.date())
        .map_err(|e| format!("invalid date '{}': {}", raw, e))
}

pub(crate) fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}

/// A fixed or recurring holiday.
///
/// A recurring holiday matches its month and day in every year. A fixed
/// holiday matches only its exact calendar date.
///
/// # Example
///
/// ```
/// use workday_calendar::models::Holiday;
/// use chrono::NaiveDate;
///
/// let christmas = Holiday::recurring("Christmas", NaiveDate::from_ymd_opt(2000, 12, 25).unwrap());
/// assert!(christmas.falls_on(NaiveDate::from_ymd_opt(2031, 12, 25).unwrap()));
///
/// let election = Holiday::fixed("Election day", NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
/// assert!(!election.falls_on(NaiveDate::from_ymd_opt(2027, 11, 3).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Unique identifier of the holiday record.
    #[serde(default)]
    pub id: Uuid,
    /// Display name of the holiday. May be absent.
    #[serde(default)]
    pub name: Option<String>,
    /// The holiday date. Only month and day matter for recurring holidays.
    #[serde(
        default = "zero_date",
        deserialize_with = "deserialize_calendar_date"
    )]
    pub date: NaiveDate,
    /// Whether the holiday recurs every year on the same month and day.
    #[serde(default)]
    pub is_recurring: bool,
}

impl Holiday {
    /// Creates a recurring holiday with a fresh identifier.
    pub fn recurring(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            date,
            is_recurring: true,
        }
    }

    /// Creates a fixed (non-recurring) holiday with a fresh identifier.
    pub fn fixed(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            date,
            is_recurring: false,
        }
    }

    /// Returns `true` if this holiday excludes `date` from being a working day.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        if self.is_recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }

    /// Returns `true` when id, date, and name are all unset.
    pub fn is_empty(&self) -> bool {
        self.id.is_nil() && self.has_zero_date() && self.trimmed_name().is_none()
    }

    /// Returns `true` if the date was never supplied.
    pub fn has_zero_date(&self) -> bool {
        self.date == zero_date()
    }

    /// Compares names case-insensitively, ignoring surrounding whitespace.
    pub fn name_matches(&self, name: &str) -> bool {
        self.trimmed_name()
            .is_some_and(|own| own.to_lowercase() == name.trim().to_lowercase())
    }

    /// Returns `true` if `other` is a different record on the same date under
    /// the same name. Unnamed holidays never clash.
    pub fn clashes_with(&self, other: &Holiday) -> bool {
        self.id != other.id
            && self.date == other.date
            && self
                .trimmed_name()
                .is_some_and(|name| other.name_matches(name))
    }

    fn trimmed_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_recurring_holiday_matches_any_year() {
        let holiday = Holiday::recurring("Constitution Day", make_date("2004-05-17"));
        assert!(holiday.falls_on(make_date("2004-05-17")));
        assert!(holiday.falls_on(make_date("1999-05-17")));
        assert!(holiday.falls_on(make_date("2030-05-17")));
        assert!(!holiday.falls_on(make_date("2004-05-18")));
    }

    #[test]
    fn test_fixed_holiday_matches_exact_date_only() {
        let holiday = Holiday::fixed("Ascension", make_date("2004-05-27"));
        assert!(holiday.falls_on(make_date("2004-05-27")));
        assert!(!holiday.falls_on(make_date("2005-05-27")));
    }

    #[test]
    fn test_recurring_leap_day_only_matches_leap_years() {
        let holiday = Holiday::recurring("Leap day", make_date("2024-02-29"));
        assert!(holiday.falls_on(make_date("2028-02-29")));
        assert!(!holiday.falls_on(make_date("2027-02-28")));
        assert!(!holiday.falls_on(make_date("2027-03-01")));
    }

    #[test]
    fn test_empty_holiday_requires_all_fields_unset() {
        let empty = Holiday {
            id: Uuid::nil(),
            name: None,
            date: zero_date(),
            is_recurring: false,
        };
        assert!(empty.is_empty());

        let blank_name = Holiday {
            name: Some("   ".to_string()),
            ..empty.clone()
        };
        assert!(blank_name.is_empty());

        let named = Holiday {
            name: Some("Christmas".to_string()),
            ..empty.clone()
        };
        assert!(!named.is_empty());

        let dated = Holiday {
            date: make_date("2025-12-25"),
            ..empty
        };
        assert!(!dated.is_empty());
    }

    #[test]
    fn test_name_matches_ignores_case_and_whitespace() {
        let holiday = Holiday::recurring("  Christmas ", make_date("2025-12-25"));
        assert!(holiday.name_matches("christmas"));
        assert!(holiday.name_matches("CHRISTMAS  "));
        assert!(!holiday.name_matches("Boxing Day"));
    }

    #[test]
    fn test_clashes_with_same_date_and_name_only() {
        let ascension = Holiday::fixed("Ascension", make_date("2004-05-27"));

        let shouted = Holiday::fixed(" ASCENSION ", make_date("2004-05-27"));
        assert!(ascension.clashes_with(&shouted));

        let next_year = Holiday::fixed("Ascension", make_date("2005-05-05"));
        assert!(!ascension.clashes_with(&next_year));

        let itself = Holiday {
            is_recurring: true,
            ..ascension.clone()
        };
        assert!(!ascension.clashes_with(&itself));

        let unnamed = Holiday {
            name: None,
            ..Holiday::fixed("", make_date("2004-05-27"))
        };
        assert!(!unnamed.clashes_with(&Holiday { name: None, ..shouted }));
    }

    #[test]
    fn test_deserialize_minimal_holiday() {
        let json = r#"{"date": "2004-05-17", "isRecurring": true}"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert!(holiday.id.is_nil());
        assert_eq!(holiday.name, None);
        assert_eq!(holiday.date, make_date("2004-05-17"));
        assert!(holiday.is_recurring);
    }

    #[test]
    fn test_deserialize_datetime_date_discards_time() {
        let json = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Christmas",
            "date": "2025-12-25T09:07:00",
            "isRecurring": true
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, make_date("2025-12-25"));
        assert_eq!(
            holiday.id.to_string(),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[test]
    fn test_deserialize_missing_date_is_zero() {
        let holiday: Holiday = serde_json::from_str(r#"{"name": "Unknown"}"#).unwrap();
        assert!(holiday.has_zero_date());
    }

    #[test]
    fn test_deserialize_invalid_date_fails() {
        let result: Result<Holiday, _> = serde_json::from_str(r#"{"date": "25/12/2025"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_holiday_uses_camel_case() {
        let holiday = Holiday::fixed("Ascension", make_date("2004-05-27"));
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"isRecurring\":false"));
        assert!(json.contains("\"date\":\"2004-05-27\""));
        assert!(json.contains("\"name\":\"Ascension\""));
    }
}
