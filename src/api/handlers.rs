use axum::{http::StatusCode, response::Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::error::ApiError;

pub type AppState<S> = Arc<S>;

/// Process start marker for the health uptime field. Forced when the router
/// is built so it reflects server start rather than the first request.
pub(crate) static STARTED: Lazy<Instant> = Lazy::new(Instant::now);

/// Success envelope wrapping every endpoint's payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}

/// Error envelope. `details` carries the per-field validation messages and
/// is omitted for other error kinds.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
            details: None,
        }
    }

    pub fn with_details(message: &str, details: Vec<String>) -> Self {
        Self {
            error: message.to_string(),
            details: Some(details),
        }
    }
}

/// Translates the error taxonomy into a response. Handlers are the only
/// layer that maps errors to status codes.
pub(crate) fn error_reply(error: ApiError) -> (StatusCode, Json<ErrorResponse>) {
    let message = error.to_string();
    match error {
        ApiError::Validation(details) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details("Validation failed", details)),
        ),
        ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, Json(ErrorResponse::new(&message))),
        ApiError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&message)),
        ),
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        uptime_seconds: STARTED.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
