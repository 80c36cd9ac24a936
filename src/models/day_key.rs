//! Day keys identifying the days exceptions and closures apply to.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::{parse_weekday, weekday_tag};
use crate::error::CalendarError;

use super::time_format::{format_day, parse_day};

/// Identifies a calendar day, either by weekday or by a specific date.
///
/// Text forms are a weekday tag (`"fri"`, case-insensitive, full names
/// accepted) or a day-only date (`"Dec 25, 2010"`). Keys display in their
/// normalized form: `"fri"` and `"Dec 25, 2010"`.
///
/// # Example
///
/// ```
/// use business_hours::models::DayKey;
/// use chrono::Weekday;
///
/// let friday: DayKey = "FRI".parse().unwrap();
/// assert_eq!(friday, DayKey::Weekday(Weekday::Fri));
/// assert_eq!(friday.to_string(), "fri");
///
/// let christmas: DayKey = "Dec 25, 2010".parse().unwrap();
/// assert_eq!(christmas.to_string(), "Dec 25, 2010");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayKey {
    /// Every occurrence of a weekday.
    Weekday(Weekday),
    /// One specific calendar date.
    Date(NaiveDate),
}

impl DayKey {
    /// Returns true if this key identifies `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DayKey::Weekday(weekday) => date.weekday() == *weekday,
            DayKey::Date(key_date) => *key_date == date,
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKey::Weekday(weekday) => write!(f, "{}", weekday_tag(*weekday)),
            DayKey::Date(date) => write!(f, "{}", format_day(*date)),
        }
    }
}

impl FromStr for DayKey {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(weekday) = parse_weekday(s) {
            return Ok(DayKey::Weekday(weekday));
        }
        parse_day(s)
            .map(DayKey::Date)
            .map_err(|_| CalendarError::ParseError {
                input: s.to_string(),
                expected: "a weekday like \"fri\" or a date like \"Dec 25, 2010\"".to_string(),
            })
    }
}

impl TryFrom<String> for DayKey {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

impl From<Weekday> for DayKey {
    fn from(weekday: Weekday) -> Self {
        DayKey::Weekday(weekday)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey::Date(date)
    }
}
