//! Application state for the business-hours API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::BusinessCalendar;

/// Shared application state.
///
/// Holds the configured calendar. Handlers only read it, so it is shared
/// behind an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    name: Arc<str>,
    calendar: Arc<BusinessCalendar>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let name = config.name().to_string();
        Self::from_calendar(name, config.into_calendar())
    }

    /// Creates a new application state around an already-built calendar.
    pub fn from_calendar(name: impl Into<String>, calendar: BusinessCalendar) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            calendar: Arc::new(calendar),
        }
    }

    /// Returns the calendar name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared calendar.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_sample_config() {
        let config = ConfigLoader::load("./config/sample").unwrap();
        let state = AppState::new(config);
        assert_eq!(state.name(), "Sample storefront");
        assert_eq!(state.calendar().exceptions().len(), 2);
    }
}
