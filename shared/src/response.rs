//! API response envelope
//!
//! Standardized response structure used for error bodies and
//! enveloped success responses:
//!
//! ```json
//! {
//!     "code": "E0000",
//!     "message": "Success",
//!     "data": { ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Standard success code
pub const APP_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct AppResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> AppResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: APP_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: APP_CODE_SUCCESS.to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}
