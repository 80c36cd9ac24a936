//! Core data models for the business-hours engine.
//!
//! This module contains the calendar, its day keys and opening hours, the
//! deadline result types, and the text formats they are read from.

mod business_calendar;
mod day_key;
mod deadline_result;
mod opening_hours;
mod time_format;

pub use business_calendar::{BusinessCalendar, DEFAULT_SEARCH_LIMIT};
pub use day_key::DayKey;
pub use deadline_result::{DaySegment, DeadlineResult};
pub use opening_hours::{HoursException, OpeningHours};
pub use time_format::{
    format_day, format_time_of_day, format_timestamp, parse_day, parse_time_of_day,
    parse_timestamp,
};
