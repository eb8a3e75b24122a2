//! HTTP request handlers for the Payslip Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_payslip;
use crate::models::{PAYSLIP_HEADER, Payslip};

use super::request::PayslipRequest;
use super::response::{ApiError, ApiErrorResponse, PayslipBatchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslips", post(payslips_handler))
        .route("/tax-brackets", get(tax_brackets_handler))
        .with_state(state)
}

/// Handler for POST /payslips endpoint.
///
/// Accepts a list of employees and returns one payslip per employee, in
/// request order. A single invalid employee fails the whole request.
async fn payslips_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let mut payslips: Vec<Payslip> = Vec::with_capacity(request.employees.len());
    for (index, employee) in request.employees.iter().enumerate() {
        match build_payslip(state.config(), employee) {
            Ok(payslip) => payslips.push(payslip),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_index = index,
                    error = %err,
                    "Payslip generation failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return ApiErrorResponse {
                    status: api_error.status,
                    error: ApiError::with_details(
                        api_error.error.code,
                        api_error.error.message,
                        format!("employees[{index}]"),
                    ),
                }
                .into_response();
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        payslips = payslips.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Payslips generated successfully"
    );

    let response = PayslipBatchResponse {
        batch_id: correlation_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        header: PAYSLIP_HEADER.iter().map(|column| column.to_string()).collect(),
        payslips,
    };
    json_response(StatusCode::OK, response)
}

/// Handler for GET /tax-brackets endpoint.
///
/// Returns the active tax bracket table.
async fn tax_brackets_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().tax_table().clone())
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
