//! Typed error handling for the libris service
//!
//! Every handler-level failure is converted into a structured JSON response
//! with an explicit status code. Clients always receive a body of the form
//! `{"error": "<message>"}`.
//!
//! # Error Categories
//!
//! - [`ApiError::Unauthorized`]: missing or unknown token (401)
//! - [`ApiError::NotFound`]: no live record for the requested id (404)
//! - [`ApiError::BadRequest`]: missing required input, empty search query (400)
//! - [`ApiError::Validation`]: malformed book payload (400)
//! - [`ApiError::Internal`]: should not happen in normal operation (500)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// The error type shared by all handlers and stores
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Missing or invalid authorization token
    Unauthorized,

    /// The requested record does not exist
    NotFound(String),

    /// The request is missing a required input
    BadRequest(String),

    /// The request payload failed to decode into the expected shape
    Validation(String),

    /// Internal service errors (lock poisoning and the like)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
