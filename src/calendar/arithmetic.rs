//! Workday arithmetic.
//!
//! This module walks a start instant forward or backward by a fractional
//! number of working days. Time is consumed in chunks bounded by the daily
//! working window, and the walk hops over weekends and holidays using the
//! day-boundary stepper.
//!
//! # Tolerances
//!
//! The loop runs while more than [`CONVERGENCE_TOLERANCE`] days remain and
//! stops early once fewer than [`EARLY_EXIT_TOLERANCE`] days remain after an
//! iteration. A leftover below the early-exit tolerance is dropped.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

use crate::config::WorkdaySettings;
use crate::error::{CalendarError, CalendarResult};
use crate::models::{Holiday, WorkdayCalculation, WorkingWindow};

use super::stepper::{next_working_day_start, previous_working_day_end};
use super::working_day::{WeekendDays, is_working_day};

/// Working hours in one day unit, independent of the configured window.
pub const HOURS_PER_WORKING_DAY: f64 = 8.0;

/// The loop keeps running while more than this many days remain.
pub const CONVERGENCE_TOLERANCE: f64 = 0.01;

/// The loop stops after any iteration leaving fewer than this many days.
pub const EARLY_EXIT_TOLERANCE: f64 = 0.1;

/// Smallest loop iteration budget given to any calculation.
pub const MIN_ITERATION_BUDGET: usize = 100_000;

/// Loop iterations allowed per working-window chunk of the requested delta.
const ITERATIONS_PER_CHUNK: f64 = 4.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Calculates the instant reached by moving `request.working_days` working
/// days from `request.start_date_time`.
///
/// Working hours missing from the request (or set to midnight) come from
/// `settings`, as does the weekend definition. An absent holiday list is
/// treated as empty.
///
/// # Errors
///
/// - [`CalendarError::Validation`] if the resolved window ends before it starts
/// - [`CalendarError::NoWorkingDayFound`] if the calendar has no working day
///   within reach
/// - [`CalendarError::IterationLimitExceeded`] if the loop fails to converge
/// - [`CalendarError::DateOutOfRange`] if the walk leaves chrono's date range
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::calculate_workday;
/// use workday_calendar::config::WorkdaySettings;
/// use workday_calendar::models::WorkdayCalculation;
/// use chrono::NaiveDateTime;
///
/// let settings = WorkdaySettings::default();
/// let request = WorkdayCalculation {
///     start_date_time: "2004-05-24T15:07:00".parse::<NaiveDateTime>().unwrap(),
///     working_days: 0.25,
///     holidays: Some(vec![]),
///     working_hours: None,
/// };
///
/// let result = calculate_workday(&request, &settings).unwrap();
/// assert_eq!(result, "2004-05-25T09:07:00".parse::<NaiveDateTime>().unwrap());
/// ```
pub fn calculate_workday(
    request: &WorkdayCalculation,
    settings: &WorkdaySettings,
) -> CalendarResult<NaiveDateTime> {
    let window = request.working_window(&settings.working_hours);
    if !window.is_valid() {
        return Err(CalendarError::Validation {
            messages: vec![super::validation::END_BEFORE_START.to_string()],
        });
    }

    let walker = Walker {
        holidays: request.holiday_list(),
        weekend: &settings.weekend_days,
        window,
    };

    let mut current = walker.clamp(request.start_date_time)?;
    let mut remaining = request.working_days;
    let mut iterations = 0usize;
    let limit = iteration_limit(remaining, &window);

    while remaining.abs() > CONVERGENCE_TOLERANCE {
        if iterations == limit {
            return Err(CalendarError::IterationLimitExceeded { iterations });
        }
        iterations += 1;

        // A clamped start can still sit on a weekend or holiday. It hops to
        // the nearest working day in the direction of travel.
        if !walker.is_working_day(current) {
            debug!(date = %current.date(), "Not a working day, skipping");
            current = if remaining > 0.0 {
                walker.next_start(current)?
            } else {
                walker.previous_end(current)?
            };
        } else if remaining > 0.0 {
            let available = hours_between(current.time(), window.end);
            let consumed = available.min(remaining * HOURS_PER_WORKING_DAY);
            current = shift_by_hours(current, consumed)?;
            remaining -= consumed / HOURS_PER_WORKING_DAY;
        } else {
            let mut available = hours_between(window.start, current.time());
            if available < 0.0 {
                current = walker.previous_end(current)?;
                available = hours_between(window.start, current.time());
            }

            let consumed = available.min(-remaining * HOURS_PER_WORKING_DAY);
            current = shift_by_hours(current, -consumed)?;
            remaining += consumed / HOURS_PER_WORKING_DAY;

            if available <= 0.0 {
                current = walker.previous_end(current)?;
            }
        }

        if current.time() >= window.end && remaining > 0.0 {
            current = walker.next_start(current)?;
        } else if current.time() < window.start && remaining < 0.0 {
            current = walker.previous_end(current)?;
        }

        trace!(iteration = iterations, current = %current, remaining, "Workday step");

        if remaining.abs() < EARLY_EXIT_TOLERANCE {
            break;
        }
    }

    debug!(
        start = %request.start_date_time,
        working_days = request.working_days,
        result = %current,
        iterations,
        "Workday calculation finished"
    );

    Ok(current)
}

/// Moves `instant` into the working window before any time is consumed.
///
/// An instant before the window start moves to the start of the same day. An
/// instant at or after the window end moves to the start of the next working
/// day. Anything inside the window is returned unchanged, even on a
/// non-working day.
pub fn clamp_to_working_window(
    instant: NaiveDateTime,
    holidays: &[Holiday],
    weekend: &WeekendDays,
    window: &WorkingWindow,
) -> CalendarResult<NaiveDateTime> {
    Walker {
        holidays,
        weekend,
        window: *window,
    }
    .clamp(instant)
}

struct Walker<'a> {
    holidays: &'a [Holiday],
    weekend: &'a WeekendDays,
    window: WorkingWindow,
}

impl Walker<'_> {
    fn clamp(&self, instant: NaiveDateTime) -> CalendarResult<NaiveDateTime> {
        if self.window.contains(instant) {
            Ok(instant)
        } else if instant.time() < self.window.start {
            Ok(instant.date().and_time(self.window.start))
        } else {
            self.next_start(instant)
        }
    }

    fn is_working_day(&self, instant: NaiveDateTime) -> bool {
        is_working_day(instant.date(), self.holidays, self.weekend)
    }

    fn next_start(&self, instant: NaiveDateTime) -> CalendarResult<NaiveDateTime> {
        next_working_day_start(instant, self.holidays, self.weekend, self.window.start)
    }

    fn previous_end(&self, instant: NaiveDateTime) -> CalendarResult<NaiveDateTime> {
        previous_working_day_end(instant, self.holidays, self.weekend, self.window.end)
    }
}

/// Iteration budget for moving `working_days` through `window`.
///
/// Every chunk of the delta fits inside one window, plus hops over
/// non-working days. Long deltas get a proportionally larger budget.
fn iteration_limit(working_days: f64, window: &WorkingWindow) -> usize {
    if !working_days.is_finite() {
        return MIN_ITERATION_BUDGET;
    }
    let chunks_per_day = (HOURS_PER_WORKING_DAY / window.span_hours()).ceil().max(1.0);
    let expected = working_days.abs() * chunks_per_day * ITERATIONS_PER_CHUNK;
    MIN_ITERATION_BUDGET.max(expected as usize)
}

fn hours_between(from: NaiveTime, to: NaiveTime) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

fn shift_by_hours(instant: NaiveDateTime, hours: f64) -> CalendarResult<NaiveDateTime> {
    let millis = (hours * MILLIS_PER_HOUR).round() as i64;
    instant
        .checked_add_signed(Duration::milliseconds(millis))
        .ok_or(CalendarError::DateOutOfRange {
            date: instant.date(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkingHours;
    use chrono::NaiveDate;

    const RESULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    fn make_datetime(value: &str) -> NaiveDateTime {
        value.parse::<NaiveDateTime>().unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn office_hours() -> Option<WorkingHours> {
        Some(WorkingHours::new(time(8, 0), time(16, 0)))
    }

    fn may_2004_holidays() -> Vec<Holiday> {
        vec![
            Holiday::recurring("Constitution Day", make_date("2004-05-17")),
            Holiday::fixed("Ascension", make_date("2004-05-27")),
        ]
    }

    fn request(start: &str, working_days: f64, holidays: Vec<Holiday>) -> WorkdayCalculation {
        WorkdayCalculation {
            start_date_time: make_datetime(start),
            working_days,
            holidays: Some(holidays),
            working_hours: office_hours(),
        }
    }

    fn calculate(start: &str, working_days: f64, holidays: Vec<Holiday>) -> String {
        calculate_workday(
            &request(start, working_days, holidays),
            &WorkdaySettings::default(),
        )
        .unwrap()
        .format(RESULT_FORMAT)
        .to_string()
    }

    // ==========================================================================
    // Reference scenarios (08:00-16:00, Saturday/Sunday weekend)
    // ==========================================================================
    #[test]
    fn test_quarter_day_from_late_afternoon_rolls_into_next_day() {
        assert_eq!(
            calculate("2004-05-24T15:07:00", 0.25, vec![]),
            "2004-05-25T09:07:00"
        );
    }

    #[test]
    fn test_half_day_from_before_opening_starts_at_opening() {
        assert_eq!(
            calculate("2004-05-24T04:00:00", 0.5, vec![]),
            "2004-05-24T12:00:00"
        );
    }

    #[test]
    fn test_subtract_five_and_a_half_days_over_holidays() {
        assert_eq!(
            calculate("2004-05-24T18:05:00", -5.5, may_2004_holidays()),
            "2004-05-14T12:00:00"
        );
    }

    #[test]
    fn test_add_fractional_days_across_two_months() {
        assert_eq!(
            calculate("2004-05-24T19:03:00", 44.723656, may_2004_holidays()),
            "2004-07-27T13:47:21"
        );
    }

    #[test]
    fn test_subtract_fractional_days_from_evening() {
        assert_eq!(
            calculate("2004-05-24T18:03:00", -6.7470217, may_2004_holidays()),
            "2004-05-13T10:01:25"
        );
    }

    #[test]
    fn test_add_fractional_days_from_morning() {
        assert_eq!(
            calculate("2004-05-24T08:03:00", 12.782709, may_2004_holidays()),
            "2004-06-10T14:18:42"
        );
    }

    #[test]
    fn test_add_fractional_days_from_before_opening() {
        assert_eq!(
            calculate("2004-05-24T07:03:00", 8.276628, may_2004_holidays()),
            "2004-06-04T10:12:46"
        );
    }

    // ==========================================================================
    // Clamping and zero deltas
    // ==========================================================================
    #[test]
    fn test_zero_days_returns_clamped_start() {
        assert_eq!(
            calculate("2004-05-24T04:00:00", 0.0, vec![]),
            "2004-05-24T08:00:00"
        );
        assert_eq!(
            calculate("2004-05-24T11:30:00", 0.0, vec![]),
            "2004-05-24T11:30:00"
        );
        assert_eq!(
            calculate("2004-05-24T16:00:00", 0.0, vec![]),
            "2004-05-25T08:00:00"
        );
    }

    #[test]
    fn test_clamp_to_working_window() {
        let weekend = WeekendDays::saturday_sunday();
        let window = WorkingWindow::new(time(8, 0), time(16, 0));

        let early = clamp_to_working_window(
            make_datetime("2004-05-24T04:00:00"),
            &[],
            &weekend,
            &window,
        )
        .unwrap();
        assert_eq!(early, make_datetime("2004-05-24T08:00:00"));

        // Friday after closing moves to Monday
        let late = clamp_to_working_window(
            make_datetime("2004-05-21T16:00:00"),
            &[],
            &weekend,
            &window,
        )
        .unwrap();
        assert_eq!(late, make_datetime("2004-05-24T08:00:00"));
    }

    #[test]
    fn test_one_full_day_lands_at_same_time_next_day() {
        assert_eq!(
            calculate("2004-05-24T10:00:00", 1.0, vec![]),
            "2004-05-25T10:00:00"
        );
    }

    #[test]
    fn test_full_day_from_opening_ends_at_closing() {
        assert_eq!(
            calculate("2004-05-24T08:00:00", 1.0, vec![]),
            "2004-05-24T16:00:00"
        );
    }

    #[test]
    fn test_adding_over_weekend() {
        // Friday 14:00 + 0.5 day = 2h Friday + 2h Monday
        assert_eq!(
            calculate("2004-05-21T14:00:00", 0.5, vec![]),
            "2004-05-24T10:00:00"
        );
    }

    #[test]
    fn test_subtracting_over_weekend() {
        // Monday 10:00 - 0.5 day = 2h Monday + 2h Friday
        assert_eq!(
            calculate("2004-05-24T10:00:00", -0.5, vec![]),
            "2004-05-21T14:00:00"
        );
    }

    #[test]
    fn test_small_remainder_is_dropped_at_day_end() {
        // 0.5h available, 0.0375 days left after consuming it: below the early
        // exit tolerance, so the walk stops at the next opening.
        assert_eq!(
            calculate("2004-05-24T15:30:00", 0.1, vec![]),
            "2004-05-25T08:00:00"
        );
    }

    #[test]
    fn test_delta_below_convergence_tolerance_is_ignored() {
        assert_eq!(
            calculate("2004-05-24T10:00:00", 0.005, vec![]),
            "2004-05-24T10:00:00"
        );
    }

    #[test]
    fn test_forward_then_backward_returns_to_start() {
        let holidays = may_2004_holidays();
        let forward = calculate("2004-05-24T10:15:00", 7.25, holidays.clone());
        assert_eq!(forward, "2004-06-03T12:15:00");

        let back = calculate(&forward, -7.25, holidays);
        assert_eq!(back, "2004-05-24T10:15:00");
    }

    // ==========================================================================
    // Configuration handling
    // ==========================================================================
    #[test]
    fn test_absent_working_hours_use_configured_defaults() {
        let settings = WorkdaySettings {
            working_hours: WorkingWindow::new(time(9, 0), time(17, 0)),
            ..WorkdaySettings::default()
        };
        let req = WorkdayCalculation {
            start_date_time: make_datetime("2004-05-24T06:00:00"),
            working_days: 0.5,
            holidays: Some(vec![]),
            working_hours: None,
        };
        let result = calculate_workday(&req, &settings).unwrap();
        assert_eq!(result, make_datetime("2004-05-24T13:00:00"));
    }

    #[test]
    fn test_day_unit_stays_eight_hours_for_narrow_window() {
        // 6h window: one day unit spills 2h into the next working day
        let req = WorkdayCalculation {
            start_date_time: make_datetime("2004-05-24T09:00:00"),
            working_days: 1.0,
            holidays: Some(vec![]),
            working_hours: Some(WorkingHours::new(time(9, 0), time(15, 0))),
        };
        let result = calculate_workday(&req, &WorkdaySettings::default()).unwrap();
        assert_eq!(result, make_datetime("2004-05-25T11:00:00"));
    }

    #[test]
    fn test_custom_weekend_is_respected() {
        // Friday/Saturday weekend: Thursday 14:00 + 0.5 lands on Sunday
        let settings = WorkdaySettings {
            weekend_days: WeekendDays::from_indices(&[5, 6]).unwrap(),
            ..WorkdaySettings::default()
        };
        let req = request("2004-05-20T14:00:00", 0.5, vec![]);
        let result = calculate_workday(&req, &settings).unwrap();
        assert_eq!(result, make_datetime("2004-05-23T10:00:00"));
    }

    #[test]
    fn test_absent_holiday_list_is_treated_as_empty() {
        let req = WorkdayCalculation {
            holidays: None,
            ..request("2004-05-24T15:07:00", 0.25, vec![])
        };
        let result = calculate_workday(&req, &WorkdaySettings::default()).unwrap();
        assert_eq!(result, make_datetime("2004-05-25T09:07:00"));
    }

    // ==========================================================================
    // Non-working starts and failures
    // ==========================================================================
    #[test]
    fn test_adding_from_saturday_moves_to_monday() {
        // 2004-05-22 is a Saturday
        assert_eq!(
            calculate("2004-05-22T10:00:00", 0.5, vec![]),
            "2004-05-24T12:00:00"
        );
    }

    #[test]
    fn test_subtracting_from_sunday_moves_to_friday() {
        // 2004-05-23 is a Sunday
        assert_eq!(
            calculate("2004-05-23T04:00:00", -0.25, vec![]),
            "2004-05-21T14:00:00"
        );
    }

    #[test]
    fn test_no_working_days_reports_error_instead_of_hanging() {
        let settings = WorkdaySettings {
            weekend_days: WeekendDays::from_indices(&[0, 1, 2, 3, 4, 5, 6]).unwrap(),
            ..WorkdaySettings::default()
        };
        let req = request("2004-05-24T18:00:00", 1.0, vec![]);
        let result = calculate_workday(&req, &settings);
        assert!(matches!(
            result,
            Err(CalendarError::NoWorkingDayFound { .. })
        ));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let req = WorkdayCalculation {
            working_hours: Some(WorkingHours::new(time(16, 0), time(8, 0))),
            ..request("2004-05-24T10:00:00", 1.0, vec![])
        };
        let result = calculate_workday(&req, &WorkdaySettings::default());
        assert!(matches!(result, Err(CalendarError::Validation { .. })));
    }

    #[test]
    fn test_nan_delta_returns_clamped_start() {
        assert_eq!(
            calculate("2004-05-24T04:00:00", f64::NAN, vec![]),
            "2004-05-24T08:00:00"
        );
    }

    #[test]
    fn test_delta_beyond_minimum_budget_completes() {
        // 150,000 days from a Monday opening is exactly 30,000 weeks, ending on a Friday
        let result = calculate_workday(
            &request("2004-05-24T08:00:00", 150_000.0, vec![]),
            &WorkdaySettings::default(),
        )
        .unwrap();

        let last_friday = make_date("2004-05-28") + chrono::Duration::weeks(29_999);
        assert_eq!(result, last_friday.and_time(time(16, 0)));
    }

    #[test]
    fn test_iteration_limit_scales_with_delta_and_window() {
        let office = WorkingWindow::new(time(8, 0), time(16, 0));
        let short = WorkingWindow::new(time(9, 0), time(11, 0));

        assert_eq!(iteration_limit(2.5, &office), MIN_ITERATION_BUDGET);
        assert_eq!(iteration_limit(f64::NAN, &office), MIN_ITERATION_BUDGET);
        assert_eq!(iteration_limit(f64::INFINITY, &office), MIN_ITERATION_BUDGET);
        assert_eq!(iteration_limit(-50_000.0, &office), 200_000);
        assert_eq!(iteration_limit(50_000.0, &short), 800_000);
    }

    #[test]
    fn test_hours_between_is_signed() {
        assert_eq!(hours_between(time(8, 0), time(16, 0)), 8.0);
        assert_eq!(hours_between(time(16, 0), time(8, 0)), -8.0);
        assert_eq!(hours_between(time(15, 7), time(16, 0)), 53.0 / 60.0);
    }

    #[test]
    fn test_shift_by_hours_rounds_to_milliseconds() {
        let start = make_datetime("2004-05-24T08:00:00");
        let shifted = shift_by_hours(start, 1.0 / 3_600_000.0 * 1.4).unwrap();
        assert_eq!(shifted, make_datetime("2004-05-24T08:00:00.001"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_zero_delta_inside_window_is_identity(
                day_offset in 0i64..5,
                minute in 0u32..(8 * 60),
            ) {
                // Monday 2004-05-24 through Friday 2004-05-28, no holidays
                let instant = make_date("2004-05-24").and_time(time(8, 0))
                    + Duration::days(day_offset)
                    + Duration::minutes(minute as i64);
                let req = WorkdayCalculation {
                    start_date_time: instant,
                    working_days: 0.0,
                    holidays: Some(vec![]),
                    working_hours: office_hours(),
                };
                let result = calculate_workday(&req, &WorkdaySettings::default()).unwrap();
                prop_assert_eq!(result, instant);
            }

            #[test]
            fn prop_forward_result_stays_inside_window(
                minute in 0u32..(8 * 60),
                working_days in 0.0f64..30.0,
            ) {
                let start = make_date("2004-05-24").and_time(time(8, 0))
                    + Duration::minutes(minute as i64);
                let req = WorkdayCalculation {
                    start_date_time: start,
                    working_days,
                    holidays: Some(may_2004_holidays()),
                    working_hours: office_hours(),
                };
                let result = calculate_workday(&req, &WorkdaySettings::default()).unwrap();
                prop_assert!(result >= start);
                prop_assert!(result.time() >= time(8, 0) && result.time() <= time(16, 0));
                prop_assert!(is_working_day(
                    result.date(),
                    &may_2004_holidays(),
                    &WeekendDays::saturday_sunday()
                ));
            }
        }
    }
}
