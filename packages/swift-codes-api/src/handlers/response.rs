//! Response bodies for HTTP endpoints.

use serde::Serialize;

/// Confirmation body for write operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Helper to create a confirmation response
pub fn message_response(message: impl Into<String>) -> MessageResponse {
    MessageResponse {
        message: message.into(),
    }
}

/// Helper to create error response
pub fn error_response(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: message.into(),
    }
}
