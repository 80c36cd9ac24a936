//! Request types for the business-hours API.
//!
//! This module defines the JSON body of `POST /deadline` and the query string
//! of `GET /opening-hours`.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::models::{parse_day, parse_timestamp};

/// Request body for the `/deadline` endpoint.
///
/// Exactly one of `duration_minutes` and `duration_hours` must be given.
///
/// ```json
/// { "start": "Jun 7, 2010 9:10 AM", "duration_hours": "2" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// When counting starts, e.g. `"Jun 7, 2010 9:10 AM"`.
    pub start: String,
    /// Business time required, in whole minutes.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    /// Business time required, in (possibly fractional) hours.
    #[serde(default)]
    pub duration_hours: Option<Decimal>,
}

impl DeadlineRequest {
    /// Parses the start timestamp.
    pub fn start_time(&self) -> CalendarResult<NaiveDateTime> {
        parse_timestamp(&self.start)
    }

    /// Resolves the requested duration.
    ///
    /// Fractional hours are rounded to the nearest second.
    pub fn duration(&self) -> CalendarResult<Duration> {
        let duration = match (self.duration_minutes, self.duration_hours) {
            (Some(minutes), None) => Duration::try_minutes(minutes),
            (None, Some(hours)) => hours
                .checked_mul(Decimal::new(3600, 0))
                .and_then(|seconds| seconds.round().to_i64())
                .and_then(Duration::try_seconds),
            (Some(_), Some(_)) => {
                return Err(invalid_duration(
                    "specify only one of duration_minutes and duration_hours",
                ));
            }
            (None, None) => {
                return Err(invalid_duration(
                    "missing field: duration_minutes or duration_hours",
                ));
            }
        };

        let duration = duration.ok_or_else(|| invalid_duration("duration is out of range"))?;
        if duration < Duration::zero() {
            return Err(invalid_duration("duration must not be negative"));
        }
        Ok(duration)
    }
}

fn invalid_duration(message: &str) -> CalendarError {
    CalendarError::InvalidDuration {
        message: message.to_string(),
    }
}

/// Query string for the `/opening-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHoursQuery {
    /// The day to resolve, e.g. `"Dec 24, 2010"`.
    pub date: String,
}

impl OpeningHoursQuery {
    /// Parses the requested day.
    pub fn day(&self) -> CalendarResult<NaiveDate> {
        parse_day(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn request(minutes: Option<i64>, hours: Option<&str>) -> DeadlineRequest {
        DeadlineRequest {
            start: "Jun 7, 2010 9:10 AM".to_string(),
            duration_minutes: minutes,
            duration_hours: hours.map(|h| Decimal::from_str(h).unwrap()),
        }
    }

    #[test]
    fn test_duration_from_minutes() {
        assert_eq!(
            request(Some(15), None).duration().unwrap(),
            Duration::minutes(15)
        );
    }

    #[test]
    fn test_duration_from_fractional_hours() {
        assert_eq!(
            request(None, Some("2.5")).duration().unwrap(),
            Duration::minutes(150)
        );
    }

    #[test]
    fn test_duration_requires_exactly_one_field() {
        assert!(matches!(
            request(None, None).duration(),
            Err(CalendarError::InvalidDuration { .. })
        ));
        assert!(matches!(
            request(Some(1), Some("1")).duration(),
            Err(CalendarError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(request(Some(-30), None).duration().is_err());
        assert!(request(None, Some("-0.5")).duration().is_err());
    }

    #[test]
    fn test_start_time_parses() {
        let start = request(Some(1), None).start_time().unwrap();
        assert_eq!(start.to_string(), "2010-06-07 09:10:00");
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{ "start": "Jun 8, 2010 2:48 PM", "duration_hours": "0.25" }"#;
        let req: DeadlineRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.duration_minutes, None);
        assert_eq!(req.duration().unwrap(), Duration::minutes(15));
    }
}
