//! Configuration types for business calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML calendar files. Times and days stay textual
//! here and are parsed when the calendar is built, so parse errors can name
//! the offending value.

use serde::Deserialize;

use crate::error::CalendarResult;
use crate::models::{BusinessCalendar, DayKey, parse_time_of_day};

/// An opening/closing pair as written in the file, e.g. `"9:00 AM"`.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursConfig {
    /// Opening time of day.
    pub open: String,
    /// Closing time of day.
    pub close: String,
}

/// An override of the default hours.
#[derive(Debug, Clone, Deserialize)]
pub struct ExceptionConfig {
    /// Weekday tag (`fri`) or day-only date (`Dec 24, 2010`).
    pub day: String,
    /// Opening time of day.
    pub open: String,
    /// Closing time of day.
    pub close: String,
}

/// A complete calendar file.
///
/// ```yaml
/// name: Sample storefront
/// default_hours:
///   open: "9:00 AM"
///   close: "3:00 PM"
/// exceptions:
///   - day: fri
///     open: "10:00 AM"
///     close: "5:00 PM"
/// closed: [sun, wed, "Dec 25, 2010"]
/// search_limit: 366
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Human-readable name of the calendar.
    pub name: String,
    /// Hours used for any day without an exception or closure.
    pub default_hours: HoursConfig,
    /// Exceptions in precedence order.
    #[serde(default)]
    pub exceptions: Vec<ExceptionConfig>,
    /// Fully closed days.
    #[serde(default)]
    pub closed: Vec<String>,
    /// Optional override of the business-day search limit.
    #[serde(default)]
    pub search_limit: Option<u32>,
}

impl CalendarConfig {
    /// Builds a validated [`BusinessCalendar`] from this configuration.
    ///
    /// Exceptions and closures are registered in file order.
    pub fn build_calendar(&self) -> CalendarResult<BusinessCalendar> {
        let mut calendar = BusinessCalendar::new(
            parse_time_of_day(&self.default_hours.open)?,
            parse_time_of_day(&self.default_hours.close)?,
        )?;

        if let Some(limit) = self.search_limit {
            calendar = calendar.with_search_limit(limit);
        }

        for exception in &self.exceptions {
            calendar.add_exception(
                exception.day.parse::<DayKey>()?,
                parse_time_of_day(&exception.open)?,
                parse_time_of_day(&exception.close)?,
            )?;
        }

        let closed = self
            .closed
            .iter()
            .map(|day| day.parse::<DayKey>())
            .collect::<CalendarResult<Vec<_>>>()?;
        calendar.add_closed_days(closed);

        Ok(calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use chrono::{NaiveDate, Weekday};

    fn parse(yaml: &str) -> CalendarConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let config = parse(
            r#"
name: Minimal
default_hours:
  open: "9:00 AM"
  close: "5:00 PM"
"#,
        );
        assert!(config.exceptions.is_empty());
        assert!(config.closed.is_empty());
        assert_eq!(config.search_limit, None);

        let calendar = config.build_calendar().unwrap();
        assert!(calendar.exceptions().is_empty());
        assert!(calendar.closed_days().is_empty());
    }

    #[test]
    fn test_build_registers_exceptions_and_closures_in_order() {
        let config = parse(
            r#"
name: Ordered
default_hours: { open: "9:00 AM", close: "3:00 PM" }
exceptions:
  - { day: fri, open: "10:00 AM", close: "5:00 PM" }
  - { day: "Dec 24, 2010", open: "8:00 AM", close: "1:00 PM" }
closed: [sun, "Dec 25, 2010"]
search_limit: 30
"#,
        );

        let calendar = config.build_calendar().unwrap();
        assert_eq!(calendar.search_limit(), 30);
        assert_eq!(calendar.exceptions()[0].day, DayKey::Weekday(Weekday::Fri));
        assert_eq!(
            calendar.closed_days(),
            &[
                DayKey::Weekday(Weekday::Sun),
                DayKey::Date(NaiveDate::from_ymd_opt(2010, 12, 25).unwrap()),
            ]
        );
    }

    #[test]
    fn test_build_reports_bad_day_key() {
        let config = parse(
            r#"
name: Broken
default_hours: { open: "9:00 AM", close: "3:00 PM" }
closed: [someday]
"#,
        );
        match config.build_calendar() {
            Err(CalendarError::ParseError { input, .. }) => assert_eq!(input, "someday"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_build_reports_inverted_exception_hours() {
        let config = parse(
            r#"
name: Inverted
default_hours: { open: "9:00 AM", close: "3:00 PM" }
exceptions:
  - { day: sat, open: "4:00 PM", close: "10:00 AM" }
"#,
        );
        assert!(matches!(
            config.build_calendar(),
            Err(CalendarError::InvalidHours { .. })
        ));
    }
}
