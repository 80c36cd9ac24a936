//! Text formats for times of day, calendar days and timestamps.
//!
//! The engine reads and writes three textual forms:
//!
//! | Form        | Example                 | Parse pattern           |
//! |-------------|-------------------------|-------------------------|
//! | time of day | `9:10 AM`               | `%I:%M %p`              |
//! | day         | `Dec 25, 2010`          | `%b %d, %Y`             |
//! | timestamp   | `Jun 7, 2010 9:10 AM`   | `%b %d, %Y %I:%M %p`    |
//!
//! A timestamp may also be given as a day alone, which means midnight.
//!
//! Days are always written without a leading zero (`Jun 7, 2010`), which is
//! also the normalized form used when comparing calendar-date keys.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalendarError, CalendarResult};

const TIME_OF_DAY_PATTERN: &str = "%I:%M %p";
const TIME_OF_DAY_24H_PATTERN: &str = "%H:%M";
const DAY_PATTERN: &str = "%b %d, %Y";
const TIMESTAMP_PATTERN: &str = "%b %d, %Y %I:%M %p";

const DAY_OUTPUT: &str = "%b %-d, %Y";
const TIME_OF_DAY_OUTPUT: &str = "%-I:%M %p";

/// Parses a time of day such as `"9:00 AM"`.
///
/// The meridiem is case-insensitive. A 24-hour `"14:30"` is accepted as well.
///
/// # Example
///
/// ```
/// use business_hours::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// let time = parse_time_of_day("3:00 PM").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
/// ```
pub fn parse_time_of_day(input: &str) -> CalendarResult<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, TIME_OF_DAY_PATTERN)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, TIME_OF_DAY_24H_PATTERN))
        .map_err(|_| CalendarError::ParseError {
            input: input.to_string(),
            expected: "a time of day like \"9:00 AM\"".to_string(),
        })
}

/// Parses a day-only date such as `"Dec 25, 2010"`.
///
/// # Example
///
/// ```
/// use business_hours::models::parse_day;
/// use chrono::NaiveDate;
///
/// let day = parse_day("Dec 25, 2010").unwrap();
/// assert_eq!(day, NaiveDate::from_ymd_opt(2010, 12, 25).unwrap());
/// ```
pub fn parse_day(input: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DAY_PATTERN).map_err(|_| CalendarError::ParseError {
        input: input.to_string(),
        expected: "a date like \"Dec 25, 2010\"".to_string(),
    })
}

/// Parses a timestamp such as `"Jun 7, 2010 9:10 AM"`.
///
/// A day alone, such as `"Dec 25, 2010"`, is read as midnight of that day.
///
/// # Example
///
/// ```
/// use business_hours::models::parse_timestamp;
///
/// let start = parse_timestamp("Jun 7, 2010 9:10 AM").unwrap();
/// assert_eq!(start.to_string(), "2010-06-07 09:10:00");
///
/// let midnight = parse_timestamp("Dec 25, 2010").unwrap();
/// assert_eq!(midnight.to_string(), "2010-12-25 00:00:00");
/// ```
pub fn parse_timestamp(input: &str) -> CalendarResult<NaiveDateTime> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_PATTERN)
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, DAY_PATTERN).map(|day| day.and_time(NaiveTime::MIN))
        })
        .map_err(|_| CalendarError::ParseError {
            input: input.to_string(),
            expected: "a timestamp like \"Jun 7, 2010 9:10 AM\" or a date like \"Dec 25, 2010\""
                .to_string(),
        })
}

/// Formats a date as `"Mon D, YYYY"`, e.g. `"Jun 7, 2010"`.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_OUTPUT).to_string()
}

/// Formats a time of day as `"H:MM AM"`, e.g. `"9:03 AM"`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_OUTPUT).to_string()
}

/// Formats a timestamp as `"Jun 10, 2010 9:03 AM"`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    format!(
        "{} {}",
        format_day(timestamp.date()),
        format_time_of_day(timestamp.time())
    )
}
