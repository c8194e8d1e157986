//! API error types and JSON error response formatting.
//!
//! Only transport-level problems become HTTP errors. Anything the skill can
//! say out loud is returned as a normal 200 response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use seedquery_core::SeedQueryError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "forbidden").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 Bad Request - the envelope could not be read.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// 403 Forbidden - the calling application is not on the allow-list.
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 500 Internal Server Error - unexpected server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.as_str()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.as_str()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.as_str()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.parts();

        let body = ErrorBody {
            error: error_code.to_string(),
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<SeedQueryError> for ApiError {
    fn from(err: SeedQueryError) -> Self {
        match err {
            SeedQueryError::Serialization(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::from(SeedQueryError::from(err))
    }
}
