//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and the mapping
//! from `GuiError` to HTTP status codes and response bodies.
//!
//! A failing check is not an HTTP error - it travels as a normal 200
//! response with `success: false`. `HttpError` covers request validation
//! and substrate faults only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use syscheck_gui::GuiError;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error, including execution-substrate faults.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

impl From<GuiError> for HttpError {
    fn from(err: GuiError) -> Self {
        // Both variants are fatal-to-this-request conditions; the JSON body
        // carries the description either way
        match err {
            GuiError::Unavailable(msg) | GuiError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}
