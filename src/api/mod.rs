//! HTTP API module for the pay calculator.
//!
//! This module provides the REST API endpoints for calculating shift pay
//! and listing the hours a shift may use.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
