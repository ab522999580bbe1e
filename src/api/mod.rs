//! HTTP API module for the Workday Calendar.
//!
//! This module provides the REST endpoints for workday calculations and
//! holiday management.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayRequest, WorkdayCalculationRequest};
pub use response::{ApiError, ApiErrorResponse, HolidayListResponse, HolidayResponse};
pub use state::AppState;
