//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading business
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{CalendarError, CalendarResult};
use crate::models::BusinessCalendar;

use super::types::CalendarConfig;

/// Name of the calendar file inside a configuration directory.
pub const CALENDAR_FILE: &str = "calendar.yaml";

/// Loads a calendar configuration and the calendar built from it.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// └── calendar.yaml   # Default hours, exceptions and closures
/// ```
///
/// # Example
///
/// ```no_run
/// use business_hours::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
/// println!("Loaded calendar: {}", loader.name());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
    calendar: BusinessCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sample")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `calendar.yaml` is missing ([`CalendarError::ConfigNotFound`])
    /// - the file is not valid YAML, or a time, day or hour range in it is
    ///   invalid ([`CalendarError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let calendar_path = path.as_ref().join(CALENDAR_FILE);
        let path_str = calendar_path.display().to_string();

        let content =
            fs::read_to_string(&calendar_path).map_err(|_| CalendarError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a calendar from YAML text. `source` names the text in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> CalendarResult<Self> {
        let config: CalendarConfig =
            serde_yaml::from_str(content).map_err(|e| CalendarError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let calendar = config
            .build_calendar()
            .map_err(|e| CalendarError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config, calendar })
    }

    /// Returns the raw configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the calendar name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the calendar built from the configuration.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Consumes the loader, returning the calendar.
    pub fn into_calendar(self) -> BusinessCalendar {
        self.calendar
    }
}
