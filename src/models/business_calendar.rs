//! Business calendar model.
//!
//! This module defines the [`BusinessCalendar`], which holds the default
//! opening hours, per-day exceptions and closures, and answers the per-date
//! queries the deadline walker is built from.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::calculation::{self, day_keys_for};
use crate::error::{CalendarError, CalendarResult};

use super::time_format::format_time_of_day;
use super::{DayKey, DeadlineResult, HoursException, OpeningHours};

/// How many days [`BusinessCalendar::next_business_day`] inspects by default
/// before giving up.
pub const DEFAULT_SEARCH_LIMIT: u32 = 366;

/// A business-hours calendar.
///
/// Resolution order for any date is: closure, then exception, then default
/// hours. Among exceptions, a calendar-date entry beats a weekday entry, and
/// within each kind the first registered entry wins.
///
/// Configure the calendar before querying it. Queries take `&self`, so a
/// configured calendar can be shared behind an `Arc`.
///
/// # Example
///
/// ```
/// use business_hours::models::{parse_time_of_day, parse_timestamp, BusinessCalendar, DayKey};
/// use chrono::Duration;
///
/// let mut calendar = BusinessCalendar::new(
///     parse_time_of_day("9:00 AM")?,
///     parse_time_of_day("3:00 PM")?,
/// )?;
/// calendar.add_exception(
///     "fri".parse::<DayKey>()?,
///     parse_time_of_day("10:00 AM")?,
///     parse_time_of_day("5:00 PM")?,
/// )?;
/// calendar.add_closed_days(["sun".parse::<DayKey>()?, "wed".parse::<DayKey>()?]);
///
/// let deadline = calendar.calculate_deadline(
///     Duration::minutes(15),
///     parse_timestamp("Jun 8, 2010 2:48 PM")?,
/// )?;
/// assert_eq!(deadline, parse_timestamp("Jun 10, 2010 9:03 AM")?);
/// # Ok::<(), business_hours::error::CalendarError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    default_open: NaiveTime,
    default_close: NaiveTime,
    exceptions: Vec<HoursException>,
    closed_days: Vec<DayKey>,
    search_limit: u32,
}

impl BusinessCalendar {
    /// Creates a calendar with the given default hours and no exceptions or
    /// closures.
    ///
    /// Returns [`CalendarError::InvalidHours`] unless `default_open` is before
    /// `default_close`.
    pub fn new(default_open: NaiveTime, default_close: NaiveTime) -> CalendarResult<Self> {
        validate_hours("default", default_open, default_close)?;
        Ok(Self {
            default_open,
            default_close,
            exceptions: Vec::new(),
            closed_days: Vec::new(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        })
    }

    /// Sets how many days a business-day search may advance before failing
    /// with [`CalendarError::NoBusinessDayFound`]. Values below 1 are raised to 1.
    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit.max(1);
        self
    }

    /// Registers an override of the default hours for `day`.
    ///
    /// Duplicates are not detected; the first matching entry wins at lookup.
    /// Returns [`CalendarError::InvalidHours`] unless `open` is before `close`,
    /// in which case the calendar is left unchanged.
    pub fn add_exception(
        &mut self,
        day: DayKey,
        open: NaiveTime,
        close: NaiveTime,
    ) -> CalendarResult<()> {
        validate_hours(&day.to_string(), open, close)?;
        self.exceptions.push(HoursException { day, open, close });
        Ok(())
    }

    /// Marks one or more days as fully closed.
    pub fn add_closed_days<I>(&mut self, days: I)
    where
        I: IntoIterator<Item = DayKey>,
    {
        self.closed_days.extend(days);
    }

    /// The default opening time.
    pub fn default_open(&self) -> NaiveTime {
        self.default_open
    }

    /// The default closing time.
    pub fn default_close(&self) -> NaiveTime {
        self.default_close
    }

    /// Registered exceptions, in insertion order.
    pub fn exceptions(&self) -> &[HoursException] {
        &self.exceptions
    }

    /// Registered closures, in insertion order.
    pub fn closed_days(&self) -> &[DayKey] {
        &self.closed_days
    }

    /// The business-day search limit.
    pub fn search_limit(&self) -> u32 {
        self.search_limit
    }

    /// Returns true if `date` is closed by its calendar date or its weekday.
    pub fn is_closed(&self, date: NaiveDate) -> bool {
        self.closed_days.iter().any(|closed| closed.matches(date))
    }

    /// Returns the exception hours for `date`, if any exception matches.
    ///
    /// All exceptions are scanned for a calendar-date match before any are
    /// scanned for a weekday match.
    pub fn exception_hours_for(&self, date: NaiveDate) -> Option<OpeningHours> {
        let keys = day_keys_for(date);
        self.exceptions
            .iter()
            .find(|exception| exception.day == keys.date)
            .or_else(|| {
                self.exceptions
                    .iter()
                    .find(|exception| exception.day == keys.weekday)
            })
            .map(|exception| exception.hours_on(date))
    }

    /// Returns the effective opening hours for `date`, or `None` if it is closed.
    pub fn opening_hours_for(&self, date: NaiveDate) -> Option<OpeningHours> {
        if self.is_closed(date) {
            return None;
        }
        Some(
            self.exception_hours_for(date)
                .unwrap_or_else(|| OpeningHours::on(date, self.default_open, self.default_close)),
        )
    }

    /// Advances from `from` one day at a time, keeping the time of day, until
    /// a day that is not closed is reached.
    ///
    /// The day of `from` itself is never returned. Fails with
    /// [`CalendarError::NoBusinessDayFound`] after
    /// [`search_limit`](Self::search_limit) closed days.
    pub fn next_business_day(&self, from: NaiveDateTime) -> CalendarResult<NaiveDateTime> {
        self.advance_to_business_day(from).map(|(day, _)| day)
    }

    /// Like [`next_business_day`](Self::next_business_day), also returning the
    /// resolved hours of the day found.
    pub(crate) fn advance_to_business_day(
        &self,
        from: NaiveDateTime,
    ) -> CalendarResult<(NaiveDateTime, OpeningHours)> {
        let exhausted = || CalendarError::NoBusinessDayFound {
            from: from.date(),
            searched_days: self.search_limit,
        };

        let mut candidate = from;
        for _ in 0..self.search_limit {
            candidate = candidate
                .checked_add_signed(Duration::days(1))
                .ok_or_else(exhausted)?;
            if let Some(hours) = self.opening_hours_for(candidate.date()) {
                return Ok((candidate, hours));
            }
            debug!(date = %candidate.date(), "Skipping closed day");
        }

        Err(exhausted())
    }

    /// Computes the instant at which `duration` of open time has elapsed,
    /// counting from `start`.
    ///
    /// See [`calculation::calculate_deadline`] for the walk and its edge cases.
    pub fn calculate_deadline(
        &self,
        duration: Duration,
        start: NaiveDateTime,
    ) -> CalendarResult<NaiveDateTime> {
        calculation::calculate_deadline(self, duration, start).map(|result| result.deadline)
    }

    /// Like [`calculate_deadline`](Self::calculate_deadline), also reporting the
    /// open time consumed on each day.
    pub fn deadline_breakdown(
        &self,
        duration: Duration,
        start: NaiveDateTime,
    ) -> CalendarResult<DeadlineResult> {
        calculation::calculate_deadline(self, duration, start)
    }
}

fn validate_hours(day: &str, open: NaiveTime, close: NaiveTime) -> CalendarResult<()> {
    if open < close {
        Ok(())
    } else {
        Err(CalendarError::InvalidHours {
            day: day.to_string(),
            open: format_time_of_day(open),
            close: format_time_of_day(close),
        })
    }
}
