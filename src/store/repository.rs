//! Holiday storage port.
//!
//! Writes check for duplicates and store in one step, so a backend must hold
//! whatever lock or transaction it uses across both.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CalendarResult;
use crate::models::Holiday;

/// Storage port for holiday records.
///
/// Listing methods return holidays sorted by date.
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Stores a new holiday unless one already uses its id, or its date
    /// together with its name (see [`Holiday::clashes_with`]).
    ///
    /// Returns the existing holiday instead of storing on a clash.
    async fn insert_unique(&self, holiday: Holiday) -> CalendarResult<Option<Holiday>>;

    /// Looks up a holiday by id.
    async fn get(&self, id: Uuid) -> CalendarResult<Option<Holiday>>;

    /// Returns every stored holiday.
    async fn list(&self) -> CalendarResult<Vec<Holiday>>;

    /// Replaces the holiday stored under `holiday.id` unless another holiday
    /// already uses its date together with its name.
    ///
    /// Returns the other holiday instead of storing on a clash.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HolidayNotFound`](crate::error::CalendarError::HolidayNotFound)
    /// if nothing is stored under the id.
    async fn update_unique(&self, holiday: Holiday) -> CalendarResult<Option<Holiday>>;

    /// Removes a holiday. Returns `false` if there was none.
    async fn delete(&self, id: Uuid) -> CalendarResult<bool>;

    /// Returns recurring holidays only.
    async fn list_recurring(&self) -> CalendarResult<Vec<Holiday>> {
        let mut holidays = self.list().await?;
        holidays.retain(|holiday| holiday.is_recurring);
        Ok(holidays)
    }

    /// Returns fixed holidays only.
    async fn list_fixed(&self) -> CalendarResult<Vec<Holiday>> {
        let mut holidays = self.list().await?;
        holidays.retain(|holiday| !holiday.is_recurring);
        Ok(holidays)
    }
}
