//! Configuration loading for business calendars.
//!
//! This module loads a calendar's default hours, exceptions and closures
//! from a YAML file and builds a validated
//! [`BusinessCalendar`](crate::models::BusinessCalendar) from them.
//!
//! # Example
//!
//! ```no_run
//! use business_hours::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded calendar: {}", loader.name());
//! ```

mod loader;
mod types;

pub use loader::{CALENDAR_FILE, ConfigLoader};
pub use types::{CalendarConfig, ExceptionConfig, HoursConfig};
