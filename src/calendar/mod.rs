//! Workday calendar core.
//!
//! This module contains the pieces that turn a start instant and a signed
//! working-day count into a result instant:
//!
//! - [`is_working_day`]: weekend and holiday detection
//! - [`next_working_day_start`] / [`previous_working_day_end`]: day-boundary stepping
//! - [`calculate_workday`]: the arithmetic loop
//! - [`validate_request`]: request checks run before calculating

mod arithmetic;
mod stepper;
mod validation;
mod working_day;

pub use arithmetic::{
    CONVERGENCE_TOLERANCE, EARLY_EXIT_TOLERANCE, HOURS_PER_WORKING_DAY,
    MIN_ITERATION_BUDGET, calculate_workday, clamp_to_working_window,
};
pub use stepper::{MAX_WORKING_DAY_SEARCH, next_working_day_start, previous_working_day_end};
pub use validation::{
    END_BEFORE_START, INVALID_HOLIDAY_DATE, INVALID_START, MISSING_HOLIDAYS, NON_FINITE_DAYS,
    START_IN_FUTURE, validate_request,
};
pub use working_day::{WeekendDays, is_working_day, weekday_index};
