//! Application state for the Workday Calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{HolidayRepository, HolidayService};

/// Shared application state.
///
/// Holds the loaded settings and the holiday service. Cloning is cheap; all
/// clones share the same configuration and holiday storage.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calendar configuration.
    config: Arc<ConfigLoader>,
    /// Holiday CRUD rules over the configured repository.
    holidays: HolidayService,
}

impl AppState {
    /// Creates a new application state over `repository`.
    pub fn new(config: ConfigLoader, repository: Arc<dyn HolidayRepository>) -> Self {
        Self {
            config: Arc::new(config),
            holidays: HolidayService::new(repository),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday service.
    pub fn holidays(&self) -> &HolidayService {
        &self.holidays
    }
}
