//! Error types and HTTP error response handling.
//!
//! Remote account-service failures never appear here: the strategies
//! convert them into failed transaction records instead of errors. What
//! remains is the small set of conditions that must surface as HTTP
//! error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::transaction::TransactionKind;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: any sqlx::Error from the transaction store
/// - **Configuration Errors**: no strategy registered for an operation
///   kind — a wiring defect, not a user-triggered condition
/// - **Validation Errors**: invalid request data caught at the HTTP edge
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No strategy is registered for the requested operation kind.
    ///
    /// Returns HTTP 500; strategies are registered statically at startup,
    /// so hitting this means the service was wired incorrectly.
    #[error("Unsupported operation kind: {0}")]
    UnsupportedOperation(TransactionKind),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request with details.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::UnsupportedOperation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unsupported_operation",
                self.to_string(),
            ),
            // Hide database details from clients
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
