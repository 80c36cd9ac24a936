//! HTTP API module for the business-hours engine.
//!
//! This module provides the REST endpoints for calculating deadlines and
//! resolving a day's opening hours against a configured calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeadlineRequest, OpeningHoursQuery};
pub use response::{ApiError, ApiErrorResponse, DeadlineResponse, OpeningHoursResponse};
pub use state::AppState;
