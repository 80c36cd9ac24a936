//! Calculation logic for the business-hours engine.
//!
//! This module contains the deadline walk, which consumes open time day by
//! day across a [`BusinessCalendar`](crate::models::BusinessCalendar), and the
//! day detection helpers that map concrete dates onto the day keys used for
//! exception and closure lookups.

mod day_detection;
mod deadline;

pub use day_detection::{DayKeys, day_keys_for, parse_weekday, weekday_tag};
pub use deadline::calculate_deadline;
