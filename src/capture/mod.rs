// src/capture/mod.rs
// Screenshot bridge: URL in, image in the same transport form as uploads

mod microlink;

pub use microlink::MicrolinkClient;

use async_trait::async_trait;
use url::Url;

use crate::error::{Result, RoasterError};
use crate::image::EncodedImage;

pub const INVALID_URL_MESSAGE: &str = "Invalid URL format";

#[async_trait]
pub trait ScreenshotProvider: Send + Sync {
    /// Capture a page. Successful captures are always PNG.
    async fn capture_url(&self, url: &str) -> Result<EncodedImage>;
}

/// Validate a user-supplied page address: absolute, http or https
pub fn parse_target_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|_| RoasterError::Validation(INVALID_URL_MESSAGE.to_string()))?;

    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(RoasterError::Validation(INVALID_URL_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_web_urls() {
        assert!(parse_target_url("https://example.com").is_ok());
        assert!(parse_target_url("http://example.com/pricing?ref=x").is_ok());
        assert!(parse_target_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_rejects_everything_else() {
        for bad in ["example.com", "not a url", "", "ftp://example.com", "mailto:a@b.c", "javascript:alert(1)"] {
            let err = parse_target_url(bad).unwrap_err();
            assert_eq!(err.to_string(), INVALID_URL_MESSAGE, "{bad}");
        }
    }
}
