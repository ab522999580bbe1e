//! Holiday rules.
//!
//! Completeness and id assignment are checked here. Duplicate detection is
//! left to the repository so it happens under the same lock as the write.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::INVALID_HOLIDAY_DATE;
use crate::error::{CalendarError, CalendarResult};
use crate::models::Holiday;

use super::repository::HolidayRepository;

/// Business rules for holiday records, on top of a [`HolidayRepository`].
///
/// - A holiday whose id, date, and name are all unset is rejected as empty.
/// - A holiday without a date is rejected.
/// - Two holidays may not share an id, nor a date together with a name
///   (compared case-insensitively after trimming).
/// - A nil id is replaced with a fresh v4 id on creation.
#[derive(Clone)]
pub struct HolidayService {
    repository: Arc<dyn HolidayRepository>,
}

impl HolidayService {
    /// Creates a service over `repository`.
    pub fn new(repository: Arc<dyn HolidayRepository>) -> Self {
        Self { repository }
    }

    /// Adds a holiday and returns it as stored.
    pub async fn add(&self, mut holiday: Holiday) -> CalendarResult<Holiday> {
        check_complete(&holiday)?;

        if holiday.id.is_nil() {
            holiday.id = Uuid::new_v4();
        }

        if let Some(existing) = self.repository.insert_unique(holiday.clone()).await? {
            warn!(id = %existing.id, date = %existing.date, "Duplicate holiday rejected");
            return Err(duplicate(&holiday));
        }
        info!(id = %holiday.id, date = %holiday.date, recurring = holiday.is_recurring, "Holiday added");
        Ok(holiday)
    }

    /// Returns the holiday stored under `id`.
    pub async fn get(&self, id: Uuid) -> CalendarResult<Holiday> {
        self.repository
            .get(id)
            .await?
            .ok_or(CalendarError::HolidayNotFound { id })
    }

    /// Returns every holiday, sorted by date.
    pub async fn list(&self) -> CalendarResult<Vec<Holiday>> {
        self.repository.list().await
    }

    /// Returns recurring holidays, sorted by date.
    pub async fn list_recurring(&self) -> CalendarResult<Vec<Holiday>> {
        self.repository.list_recurring().await
    }

    /// Returns fixed holidays, sorted by date.
    pub async fn list_fixed(&self) -> CalendarResult<Vec<Holiday>> {
        self.repository.list_fixed().await
    }

    /// Replaces the holiday stored under `id` with `holiday`'s fields.
    ///
    /// The id inside `holiday` is ignored.
    pub async fn update(&self, id: Uuid, holiday: Holiday) -> CalendarResult<Holiday> {
        let holiday = Holiday { id, ..holiday };
        check_complete(&holiday)?;

        if let Some(existing) = self.repository.update_unique(holiday.clone()).await? {
            warn!(id = %id, conflicting_id = %existing.id, "Update would duplicate a holiday");
            return Err(duplicate(&holiday));
        }
        info!(id = %id, date = %holiday.date, "Holiday updated");
        Ok(holiday)
    }

    /// Removes the holiday stored under `id`.
    pub async fn delete(&self, id: Uuid) -> CalendarResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CalendarError::HolidayNotFound { id });
        }
        info!(id = %id, "Holiday deleted");
        Ok(())
    }
}

fn check_complete(holiday: &Holiday) -> CalendarResult<()> {
    if holiday.is_empty() {
        return Err(CalendarError::EmptyHoliday);
    }
    if holiday.has_zero_date() {
        return Err(CalendarError::Validation {
            messages: vec![INVALID_HOLIDAY_DATE.to_string()],
        });
    }
    Ok(())
}

fn duplicate(holiday: &Holiday) -> CalendarError {
    CalendarError::DuplicateHoliday {
        name: holiday.name.clone().unwrap_or_default(),
        date: holiday.date,
    }
}
