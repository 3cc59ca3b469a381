// src/api/types.rs
// Request/response bodies for the JSON endpoints

use serde::{Deserialize, Serialize};

use super::error::{ApiError, MISSING_IMAGE_MESSAGE, URL_REQUIRED_MESSAGE};
use crate::capture::parse_target_url;
use crate::image::{EncodedImage, ImageMime};

/// `POST /api/roast` body. Fields are optional so a missing one gets our
/// message instead of the extractor's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl RoastRequest {
    pub fn new(image: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            mime_type: Some(mime_type.into()),
        }
    }

    /// Check presence first, then the MIME allow-list
    pub fn into_image(self) -> Result<EncodedImage, ApiError> {
        let image = self.image.filter(|i| !i.is_empty());
        let mime_type = self.mime_type.filter(|m| !m.is_empty());

        let (Some(image), Some(mime_type)) = (image, mime_type) else {
            return Err(ApiError::bad_request(MISSING_IMAGE_MESSAGE));
        };

        let mime: ImageMime = mime_type
            .parse()
            .map_err(|e: crate::error::RoasterError| ApiError::bad_request(e.to_string()))?;

        Ok(EncodedImage::new(image, mime))
    }
}

/// `POST /api/screenshot` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenshotRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ScreenshotRequest {
    /// The trimmed URL, validated as an absolute http(s) address
    pub fn target(&self) -> Result<String, ApiError> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApiError::bad_request(URL_REQUIRED_MESSAGE))?;

        parse_target_url(url).map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(url.to_string())
    }
}

/// `POST /api/screenshot` success body; same shape the roast endpoint takes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotResponse {
    pub image: String,
    pub mime_type: ImageMime,
}

impl From<EncodedImage> for ScreenshotResponse {
    fn from(image: EncodedImage) -> Self {
        Self {
            image: image.data,
            mime_type: image.mime,
        }
    }
}
