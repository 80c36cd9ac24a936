//! Day detection and day-key normalization.
//!
//! This module provides the helpers that map a concrete date onto the two
//! [`DayKey`]s it can be matched by (its calendar date and its weekday), and
//! the normalization of weekday tags to their lowercase three-letter form.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::DayKey;

/// Returns the normalized lowercase three-letter tag for a weekday.
///
/// # Example
///
/// ```
/// use business_hours::calculation::weekday_tag;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_tag(Weekday::Fri), "fri");
/// assert_eq!(weekday_tag(Weekday::Sun), "sun");
/// ```
pub fn weekday_tag(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

/// Parses a weekday tag, case-insensitively.
///
/// Accepts the three-letter abbreviation (`"fri"`, `"FRI"`) and the full name
/// (`"Friday"`). Returns `None` for anything else.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    input.trim().parse::<Weekday>().ok()
}

/// The two keys a concrete date can be matched by.
///
/// Lookups check `date` before `weekday`, so a calendar-date entry always
/// wins over a weekday entry for the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayKeys {
    /// The calendar-date key (time of day already discarded).
    pub date: DayKey,
    /// The weekday key.
    pub weekday: DayKey,
}

/// Determines the day keys for a given date.
///
/// # Example
///
/// ```
/// use business_hours::calculation::day_keys_for;
/// use business_hours::models::DayKey;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2010-06-11 is a Friday
/// let keys = day_keys_for(NaiveDate::from_ymd_opt(2010, 6, 11).unwrap());
/// assert_eq!(keys.weekday, DayKey::Weekday(Weekday::Fri));
/// assert_eq!(keys.date.to_string(), "Jun 11, 2010");
/// ```
pub fn day_keys_for(date: NaiveDate) -> DayKeys {
    DayKeys {
        date: DayKey::Date(date),
        weekday: DayKey::Weekday(date.weekday()),
    }
}
