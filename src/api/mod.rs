//! HTTP API module for the Payslip Engine.
//!
//! This module provides the REST endpoints for generating payslips from a
//! JSON list of employees and for inspecting the active tax bracket table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayslipRequest;
pub use response::{ApiError, PayslipBatchResponse};
pub use state::AppState;
