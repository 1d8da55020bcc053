//! # API Errors
//!
//! HTTP-facing error taxonomy. Every handled failure renders as the same
//! JSON envelope (`{"success": false, "error": "..."}`); the server never
//! answers a handled error with a bare transport failure. Store errors
//! deliberately map to the fixed string "Database error" so driver detail
//! never leaks to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::benchmark::BulkInsertError;
use crate::db::DbError;
use crate::templates::AssembleError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// POST without a body
    #[error("Missing request body")]
    MissingBody,

    /// Body is not parseable JSON
    #[error("Invalid JSON")]
    InvalidJson,

    /// Body parsed but does not match the expected shape
    #[error("Invalid request format")]
    InvalidFormat,

    /// Root entity absent; carries the resource noun for the message
    #[error("{0} not found")]
    NotFound(&'static str),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store-level failure at a required fetch
    #[error("Database error")]
    Database,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingBody => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::InvalidFormat => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(_: DbError) -> Self {
        ApiError::Database
    }
}

impl From<BulkInsertError> for ApiError {
    fn from(err: BulkInsertError) -> Self {
        match err {
            BulkInsertError::InvalidFormat => ApiError::InvalidFormat,
        }
    }
}

impl From<AssembleError> for ApiError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::NotFound => ApiError::NotFound("Template"),
            AssembleError::Database(_) => ApiError::Database,
        }
    }
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorEnvelope::from(&self));
        (status, body).into_response()
    }
}
