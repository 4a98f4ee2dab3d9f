//! HTTP API module for the wage engine.
//!
//! This module provides the REST API endpoints for computing daily pay
//! and weekly payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyPayRequest, DayEntryRequest, WeeklyPayrollRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
