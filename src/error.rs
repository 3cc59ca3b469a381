// src/error.rs
// Standardized error types for the roaster

use thiserror::Error;

/// Main error type for the roaster library
#[derive(Error, Debug)]
pub enum RoasterError {
    /// Bad or missing input, surfaced to callers as a 400 with this message
    #[error("{0}")]
    Validation(String),

    /// Completion provider failure or empty completion
    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
    },

    #[error("capture error: {0}")]
    Capture(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Why a share token could not be turned back into a roast
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,

    #[error("token is not valid percent-encoding")]
    Percent,

    #[error("token is not valid base64")]
    Base64,

    #[error("token payload is not a roast: {0}")]
    Payload(String),

    #[error("slop score {0} is out of range")]
    ScoreOutOfRange(u64),
}

/// Convenience type alias for Result using RoasterError
pub type Result<T> = std::result::Result<T, RoasterError>;

impl RoasterError {
    pub fn upstream(message: impl Into<String>) -> Self {
        RoasterError::Upstream {
            message: message.into(),
            status: None,
        }
    }

    pub fn upstream_with_status(message: impl Into<String>, status: u16) -> Self {
        RoasterError::Upstream {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Whether the error looks like provider rate limiting.
    ///
    /// An HTTP 429 counts, as does a message containing "rate" or "429"
    /// anywhere, case-insensitively.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            RoasterError::Upstream { message, status } => {
                *status == Some(429) || message_mentions_rate_limit(message)
            }
            RoasterError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 429),
            _ => false,
        }
    }
}

fn message_mentions_rate_limit(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("rate") || message.contains("429")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Display
    // ============================================================================

    #[test]
    fn test_validation_displays_bare_message() {
        let err = RoasterError::Validation("Missing image data".to_string());
        assert_eq!(err.to_string(), "Missing image data");
    }

    #[test]
    fn test_upstream_error() {
        let err = RoasterError::upstream("model exploded");
        assert!(err.to_string().contains("upstream error"));
        assert!(err.to_string().contains("model exploded"));
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(DecodeError::Base64.to_string(), "token is not valid base64");
        assert!(DecodeError::ScoreOutOfRange(150).to_string().contains("150"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RoasterError = io_err.into();
        assert!(matches!(err, RoasterError::Io(_)));
    }

    // ============================================================================
    // Rate limit classification
    // ============================================================================

    #[test]
    fn test_rate_limited_by_status() {
        let err = RoasterError::upstream_with_status("Too Many Requests", 429);
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_rate_limited_by_message() {
        assert!(RoasterError::upstream("Rate limit exceeded: free-models-per-day").is_rate_limited());
        assert!(RoasterError::upstream("rate_limit_exceeded").is_rate_limited());
        assert!(RoasterError::upstream("API error 429: slow down").is_rate_limited());
        assert!(RoasterError::upstream("Provider is ratelimited").is_rate_limited());
    }

    #[test]
    fn test_rate_limited_by_substring() {
        assert!(RoasterError::upstream("HTTP429 Too Many Requests").is_rate_limited());
        assert!(RoasterError::upstream("Provider overrate limit").is_rate_limited());
        assert!(RoasterError::upstream("All models failed to generate a response").is_rate_limited());
        assert!(RoasterError::upstream_with_status("GENERATE failed", 500).is_rate_limited());
    }

    #[test]
    fn test_not_rate_limited() {
        assert!(!RoasterError::upstream_with_status("Internal error", 500).is_rate_limited());
        assert!(!RoasterError::upstream("model-a returned an empty completion").is_rate_limited());
        assert!(!RoasterError::upstream("API request to model-a failed").is_rate_limited());
        assert!(!RoasterError::Capture("rate limited".to_string()).is_rate_limited());
        assert!(!RoasterError::Config("429".to_string()).is_rate_limited());
    }
}
