//! Unified error handling
//!
//! Application-level error enum shared between server and client:
//! - [`AppError`] - error variants with stable error codes
//! - [`AppResult`] - result alias used by HTTP handlers
//!
//! # Error code conventions
//!
//! | Prefix | Category | Example |
//! |--------|----------|---------|
//! | E0xxx  | Request/validation errors | E0003 not found |
//! | E7xxx  | Print dispatch errors | E7001 printer unavailable |
//! | E9xxx  | System errors | E9001 internal error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::response::AppResponse;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Request errors (4xx) ==========
    #[error("Resource not found: {0}")]
    /// Resource does not exist (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// Malformed input, e.g. negative quantity (400)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// Request shape errors (400)
    Invalid(String),

    // ========== Print dispatch errors ==========
    #[error("Printer unavailable: {0}")]
    /// Selected printer not present in the latest discovery (422)
    PrinterUnavailable(String),

    #[error("Print agent rejected the job ({status}): {body}")]
    /// Agent reachable but rejected the submission (502)
    AgentRejected { status: u16, body: String },

    #[error("Print agent unreachable: {0}")]
    /// Transport failure talking to a configured agent (503)
    AgentUnreachable(String),

    // ========== System errors (5xx) ==========
    #[error("Internal server error: {0}")]
    /// Internal error (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.clone()),

            AppError::PrinterUnavailable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E7001", msg.clone())
            }
            // Agent status/body are surfaced verbatim so the operator
            // sees actionable diagnostics
            AppError::AgentRejected { status, body } => (
                StatusCode::BAD_GATEWAY,
                "E7002",
                format!("Agent returned {}: {}", status, body),
            ),
            AppError::AgentUnreachable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E7003", msg.clone())
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(AppResponse::<()>::error(code, message));
        (status, body).into_response()
    }
}

/// Result type for API operations
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper constructors ==========

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn printer_unavailable(printer: impl Into<String>) -> Self {
        Self::PrinterUnavailable(printer.into())
    }
}
