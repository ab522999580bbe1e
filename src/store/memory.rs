//! In-memory holiday backend.
//!
//! Holidays live in a map behind a tokio `RwLock`. Writes hold the write lock
//! across the duplicate check and the store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CalendarError, CalendarResult};
use crate::models::Holiday;

use super::repository::HolidayRepository;

/// Process-local holiday storage.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolidayRepository {
    holidays: Arc<RwLock<HashMap<Uuid, Holiday>>>,
}

impl InMemoryHolidayRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with `holidays`.
    pub fn with_holidays(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let map = holidays
            .into_iter()
            .map(|holiday| (holiday.id, holiday))
            .collect();
        Self {
            holidays: Arc::new(RwLock::new(map)),
        }
    }
}

fn sorted(mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    holidays
}

fn find_clash(holidays: &HashMap<Uuid, Holiday>, candidate: &Holiday) -> Option<Holiday> {
    holidays
        .values()
        .find(|existing| candidate.clashes_with(existing))
        .cloned()
}

#[async_trait]
impl HolidayRepository for InMemoryHolidayRepository {
    async fn insert_unique(&self, holiday: Holiday) -> CalendarResult<Option<Holiday>> {
        let mut holidays = self.holidays.write().await;
        let conflict = holidays
            .get(&holiday.id)
            .cloned()
            .or_else(|| find_clash(&holidays, &holiday));
        if conflict.is_none() {
            holidays.insert(holiday.id, holiday);
        }
        Ok(conflict)
    }

    async fn get(&self, id: Uuid) -> CalendarResult<Option<Holiday>> {
        Ok(self.holidays.read().await.get(&id).cloned())
    }

    async fn list(&self) -> CalendarResult<Vec<Holiday>> {
        let holidays = self.holidays.read().await.values().cloned().collect();
        Ok(sorted(holidays))
    }

    async fn update_unique(&self, holiday: Holiday) -> CalendarResult<Option<Holiday>> {
        let mut holidays = self.holidays.write().await;
        if !holidays.contains_key(&holiday.id) {
            return Err(CalendarError::HolidayNotFound { id: holiday.id });
        }

        let conflict = find_clash(&holidays, &holiday);
        if conflict.is_none() {
            holidays.insert(holiday.id, holiday);
        }
        Ok(conflict)
    }

    async fn delete(&self, id: Uuid) -> CalendarResult<bool> {
        Ok(self.holidays.write().await.remove(&id).is_some())
    }
}
