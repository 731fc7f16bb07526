//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoint for computing month-to-date
//! earnings from already-fetched collaborator data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
