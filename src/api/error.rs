// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

use crate::error::RoasterError;

pub const MISSING_IMAGE_MESSAGE: &str = "Missing image data";
pub const IMAGE_TOO_LARGE_MESSAGE: &str = "Image too large. Keep uploads under 5MB.";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limited. Please wait a moment and try again.";
pub const ROAST_FAILED_MESSAGE: &str = "Failed to generate roast. Please try again.";
pub const URL_REQUIRED_MESSAGE: &str = "URL is required";
pub const CAPTURE_FAILED_MESSAGE: &str = "Failed to capture screenshot. Try uploading manually.";

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: Some("INTERNAL_ERROR".to_string()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::TOO_MANY_REQUESTS,
            error_code: Some("RATE_LIMITED".to_string()),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::PAYLOAD_TOO_LARGE,
            error_code: Some("PAYLOAD_TOO_LARGE".to_string()),
        }
    }

    /// Map a failed roast to what the client sees. Internal detail is logged,
    /// never returned.
    pub fn from_roast_error(err: &RoasterError) -> Self {
        match err {
            RoasterError::Validation(message) => Self::bad_request(message.clone()),
            e if e.is_rate_limited() => {
                warn!(error = %e, "Roast rate limited upstream");
                Self::too_many_requests(RATE_LIMITED_MESSAGE)
            }
            e => {
                error!(error = %e, "Roast failed");
                Self::internal(ROAST_FAILED_MESSAGE)
            }
        }
    }

    /// Map a failed screenshot capture to what the client sees
    pub fn from_capture_error(err: &RoasterError) -> Self {
        match err {
            RoasterError::Validation(message) => Self::bad_request(message.clone()),
            e => {
                error!(error = %e, "Screenshot capture failed");
                Self::internal(CAPTURE_FAILED_MESSAGE)
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
