//! Opening hours and per-day exceptions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::DayKey;

/// Opening hours resolved for one concrete date.
///
/// Both bounds are absolute timestamps anchored to that date, so the window
/// can be compared directly against any instant.
///
/// # Example
///
/// ```
/// use business_hours::models::OpeningHours;
/// use chrono::{Duration, NaiveDate, NaiveTime};
///
/// let hours = OpeningHours::on(
///     NaiveDate::from_ymd_opt(2010, 6, 7).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
/// );
/// assert_eq!(hours.close - hours.open, Duration::hours(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// When the business opens.
    pub open: NaiveDateTime,
    /// When the business closes.
    pub close: NaiveDateTime,
}

impl OpeningHours {
    /// Anchors a pair of times of day to `date`.
    pub fn on(date: NaiveDate, open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            open: date.and_time(open),
            close: date.and_time(close),
        }
    }

    /// Returns true if `instant` falls within `[open, close]`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.open <= instant && instant <= self.close
    }
}

/// An override of the default hours for the days matching `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursException {
    /// The day (weekday or date) the override applies to.
    pub day: DayKey,
    /// Opening time on matching days.
    pub open: NaiveTime,
    /// Closing time on matching days.
    pub close: NaiveTime,
}

impl HoursException {
    /// Resolves this exception's hours on `date`.
    pub fn hours_on(&self, date: NaiveDate) -> OpeningHours {
        OpeningHours::on(date, self.open, self.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hours_are_anchored_to_date() {
        let hours = OpeningHours::on(date(2010, 12, 24), time(8, 0), time(13, 0));
        assert_eq!(hours.open, date(2010, 12, 24).and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(hours.close, date(2010, 12, 24).and_hms_opt(13, 0, 0).unwrap());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let hours = OpeningHours::on(date(2010, 6, 7), time(9, 0), time(15, 0));
        assert!(hours.contains(hours.open));
        assert!(hours.contains(hours.close));
        assert!(!hours.contains(date(2010, 6, 7).and_hms_opt(8, 59, 0).unwrap()));
        assert!(!hours.contains(date(2010, 6, 8).and_hms_opt(10, 0, 0).unwrap()));
    }

    #[test]
    fn test_exception_hours_on_date() {
        let exception = HoursException {
            day: DayKey::Weekday(Weekday::Fri),
            open: time(10, 0),
            close: time(17, 0),
        };
        let hours = exception.hours_on(date(2010, 6, 11));
        assert_eq!(hours, OpeningHours::on(date(2010, 6, 11), time(10, 0), time(17, 0)));
    }

    #[test]
    fn test_opening_hours_serialization() {
        let hours = OpeningHours::on(date(2010, 6, 7), time(9, 0), time(15, 0));
        let json = serde_json::to_string(&hours).unwrap();
        assert!(json.contains("\"open\":\"2010-06-07T09:00:00\""));

        let deserialized: OpeningHours = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, hours);
    }
}
