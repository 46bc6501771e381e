//! Callback endpoint DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body for a processed webhook delivery
#[derive(Debug, Serialize, ToSchema)]
pub struct CallbackResponse {
    /// Always "ok"
    pub status: String,
}

impl CallbackResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error body for rejected requests
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn invalid_request() -> Self {
        Self {
            status: "error".to_string(),
            message: "Invalid request".to_string(),
        }
    }
}
