//! Error types for the business-hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a calendar, a deadline query or the configuration
//! loader can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the business-hours engine.
///
/// Errors are local to the call that raised them: a calendar that rejected an
/// exception or failed a query is left unchanged and remains usable.
///
/// # Example
///
/// ```
/// use business_hours::error::CalendarError;
///
/// let error = CalendarError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date, time or day key could not be parsed.
    #[error("Failed to parse '{input}': expected {expected}")]
    ParseError {
        /// The offending text.
        input: String,
        /// The expected format.
        expected: String,
    },

    /// Opening hours where the opening time is not before the closing time.
    #[error("Invalid opening hours for {day}: open {open} is not before close {close}")]
    InvalidHours {
        /// The day the hours were registered for ("default" for the calendar defaults).
        day: String,
        /// The opening time as supplied.
        open: String,
        /// The closing time as supplied.
        close: String,
    },

    /// No open day was found within the search limit.
    #[error("No business day found within {searched_days} days after {from}")]
    NoBusinessDayFound {
        /// The date the search started from.
        from: NaiveDate,
        /// How many days were inspected before giving up.
        searched_days: u32,
    },

    /// A requested duration was unusable.
    #[error("Invalid duration: {message}")]
    InvalidDuration {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CalendarError::ConfigNotFound {
            path: "/missing/calendar.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calendar.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CalendarError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_parse_error_names_input_and_format() {
        let error = CalendarError::ParseError {
            input: "25/12/2010".to_string(),
            expected: "a date like \"Dec 25, 2010\"".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse '25/12/2010': expected a date like \"Dec 25, 2010\""
        );
    }

    #[test]
    fn test_invalid_hours_displays_day_and_times() {
        let error = CalendarError::InvalidHours {
            day: "fri".to_string(),
            open: "5:00 PM".to_string(),
            close: "10:00 AM".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid opening hours for fri: open 5:00 PM is not before close 10:00 AM"
        );
    }

    #[test]
    fn test_no_business_day_found_displays_limit_and_date() {
        let error = CalendarError::NoBusinessDayFound {
            from: NaiveDate::from_ymd_opt(2010, 6, 7).unwrap(),
            searched_days: 366,
        };
        assert_eq!(
            error.to_string(),
            "No business day found within 366 days after 2010-06-07"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalendarError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_duration() -> CalendarResult<()> {
            Err(CalendarError::InvalidDuration {
                message: "negative".to_string(),
            })
        }

        fn propagates_error() -> CalendarResult<()> {
            returns_invalid_duration()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
