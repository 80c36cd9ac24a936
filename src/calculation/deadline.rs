//! Deadline calculation.
//!
//! This module walks a [`BusinessCalendar`] day by day, consuming open time
//! until a requested duration has been spent, and records how much time each
//! business day contributed.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{BusinessCalendar, DaySegment, DeadlineResult};

/// Calculates the deadline for `duration` of open time starting at `start`.
///
/// The walk works as follows:
/// 1. Resolve the opening hours of the start date.
/// 2. Start counting at `max(start, open)`.
/// 3. While the remaining duration does not fit before closing time, consume
///    what is left of the day and move to the next business day's opening.
/// 4. The deadline is the counting position plus the remaining duration.
///
/// # Behavior
///
/// - A start before opening time counts from opening time.
/// - A start after closing time consumes nothing that day and counts from the
///   next business day's opening.
/// - A start on a closed day counts from the next business day's opening.
/// - A zero duration inside opening hours returns `max(start, open)`.
/// - The consumed time across all returned segments equals `duration`.
///
/// # Errors
///
/// - [`CalendarError::InvalidDuration`] if `duration` is negative, or if the
///   deadline would fall outside the representable date range.
/// - [`CalendarError::NoBusinessDayFound`] if no business day is found within
///   the calendar's search limit.
///
/// # Example
///
/// ```
/// use business_hours::calculation::calculate_deadline;
/// use business_hours::models::{parse_time_of_day, parse_timestamp, BusinessCalendar, DayKey};
/// use chrono::Duration;
///
/// let mut calendar = BusinessCalendar::new(
///     parse_time_of_day("9:00 AM")?,
///     parse_time_of_day("3:00 PM")?,
/// )?;
/// calendar.add_exception(
///     "Dec 24, 2010".parse::<DayKey>()?,
///     parse_time_of_day("8:00 AM")?,
///     parse_time_of_day("1:00 PM")?,
/// )?;
/// calendar.add_closed_days(["sun".parse::<DayKey>()?, "Dec 25, 2010".parse::<DayKey>()?]);
///
/// let result = calculate_deadline(
///     &calendar,
///     Duration::hours(7),
///     parse_timestamp("Dec 24, 2010 6:45 AM")?,
/// )?;
/// assert_eq!(result.deadline, parse_timestamp("Dec 27, 2010 11:00 AM")?);
/// assert_eq!(result.segments.len(), 2);
/// assert_eq!(result.consumed(), Duration::hours(7));
/// # Ok::<(), business_hours::error::CalendarError>(())
/// ```
pub fn calculate_deadline(
    calendar: &BusinessCalendar,
    duration: Duration,
    start: NaiveDateTime,
) -> CalendarResult<DeadlineResult> {
    if duration < Duration::zero() {
        return Err(CalendarError::InvalidDuration {
            message: format!(
                "duration must not be negative, got {} seconds",
                duration.num_seconds()
            ),
        });
    }

    let mut hours = match calendar.opening_hours_for(start.date()) {
        Some(hours) => hours,
        None => {
            debug!(date = %start.date(), "Start date is closed, rolling forward");
            calendar.advance_to_business_day(start)?.1
        }
    };

    let mut cursor = start.max(hours.open);
    if cursor > hours.close {
        debug!(start = %start, close = %hours.close, "Start is after closing time, rolling forward");
        hours = calendar.advance_to_business_day(cursor)?.1;
        cursor = hours.open;
    }

    let mut remaining = duration;
    let mut segments = Vec::new();

    let deadline = loop {
        let end = cursor
            .checked_add_signed(remaining)
            .ok_or_else(|| out_of_range(start, duration))?;
        if end <= hours.close {
            break end;
        }

        let available = hours.close - cursor;
        remaining = remaining - available;
        if available > Duration::zero() {
            segments.push(DaySegment::new(cursor, hours.close));
        }
        debug!(
            date = %cursor.date(),
            consumed_seconds = available.num_seconds(),
            remaining_seconds = remaining.num_seconds(),
            "Consumed rest of business day"
        );

        hours = calendar.advance_to_business_day(cursor)?.1;
        cursor = hours.open;
    };

    if remaining > Duration::zero() {
        segments.push(DaySegment::new(cursor, deadline));
    }

    Ok(DeadlineResult {
        start,
        duration_seconds: duration.num_seconds(),
        deadline,
        segments,
    })
}

fn out_of_range(start: NaiveDateTime, duration: Duration) -> CalendarError {
    CalendarError::InvalidDuration {
        message: format!(
            "deadline is out of range: {} seconds after {}",
            duration.num_seconds(),
            start
        ),
    }
}
