//! Deadline result models.
//!
//! This module contains the [`DeadlineResult`] type, which records the
//! deadline together with how much open time was consumed on each business
//! day the walk passed through.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places kept when reporting consumed hours.
const HOURS_PRECISION: u32 = 4;

/// Open time consumed on one business day.
///
/// # Example
///
/// ```
/// use business_hours::models::DaySegment;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2010, 12, 24).unwrap();
/// let segment = DaySegment::new(
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     day.and_hms_opt(13, 0, 0).unwrap(),
/// );
/// assert_eq!(segment.consumed_seconds, 5 * 3600);
/// assert_eq!(segment.hours, Decimal::new(5, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The business day this segment belongs to.
    pub date: NaiveDate,
    /// Where counting started on this day.
    pub from: NaiveDateTime,
    /// Where counting stopped on this day.
    pub until: NaiveDateTime,
    /// Seconds of open time consumed.
    pub consumed_seconds: i64,
    /// Consumed time in hours, rounded for display.
    pub hours: Decimal,
}

impl DaySegment {
    /// Creates a segment spanning `[from, until]` on `from`'s date.
    pub fn new(from: NaiveDateTime, until: NaiveDateTime) -> Self {
        let consumed_seconds = (until - from).num_seconds();
        Self {
            date: from.date(),
            from,
            until,
            consumed_seconds,
            hours: seconds_to_hours(consumed_seconds),
        }
    }

    /// The consumed open time.
    pub fn consumed(&self) -> Duration {
        self.until - self.from
    }
}

/// The outcome of a deadline calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    /// The requested start instant.
    pub start: NaiveDateTime,
    /// The requested business-time duration in seconds.
    pub duration_seconds: i64,
    /// The instant at which the duration is satisfied.
    pub deadline: NaiveDateTime,
    /// Per-day consumption, in chronological order. Days that contributed no
    /// open time are omitted.
    pub segments: Vec<DaySegment>,
}

impl DeadlineResult {
    /// Total open time consumed across all segments.
    pub fn consumed(&self) -> Duration {
        self.segments
            .iter()
            .fold(Duration::zero(), |total, segment| total + segment.consumed())
    }

    /// Total consumed hours, rounded for display.
    pub fn total_hours(&self) -> Decimal {
        seconds_to_hours(self.consumed().num_seconds())
    }
}

fn seconds_to_hours(seconds: i64) -> Decimal {
    (Decimal::new(seconds, 0) / Decimal::new(3600, 0)).round_dp(HOURS_PRECISION)
}
