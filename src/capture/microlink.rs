// src/capture/microlink.rs
// Microlink screenshot API: JSON lookup, then fetch the PNG it points at

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::{ScreenshotProvider, parse_target_url};
use crate::error::{Result, RoasterError};
use crate::image::{EncodedImage, ImageMime};

#[derive(Debug, Deserialize)]
struct MicrolinkResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<MicrolinkData>,
}

#[derive(Debug, Deserialize)]
struct MicrolinkData {
    #[serde(default)]
    screenshot: Option<MicrolinkAsset>,
}

#[derive(Debug, Deserialize)]
struct MicrolinkAsset {
    #[serde(default)]
    url: Option<String>,
}

impl MicrolinkResponse {
    fn screenshot_url(self) -> std::result::Result<String, String> {
        let failure = self
            .message
            .clone()
            .unwrap_or_else(|| "screenshot provider reported failure".to_string());

        if self.status.as_deref() != Some("success") {
            return Err(failure);
        }

        self.data
            .and_then(|d| d.screenshot)
            .and_then(|s| s.url)
            .filter(|u| !u.is_empty())
            .ok_or(failure)
    }
}

/// Screenshot bridge backed by Microlink (no API key on the free tier)
pub struct MicrolinkClient {
    http: reqwest::Client,
    base_url: String,
}

impl MicrolinkClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn lookup(&self, target: &str) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .query(&[("url", target), ("screenshot", "true"), ("meta", "false")])
            .send()
            .await
            .map_err(|e| RoasterError::Capture(format!("screenshot request failed: {}", e)))?;

        let body: MicrolinkResponse = response
            .json()
            .await
            .map_err(|e| RoasterError::Capture(format!("unreadable screenshot response: {}", e)))?;

        body.screenshot_url().map_err(RoasterError::Capture)
    }

    async fn download(&self, image_url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(image_url)
            .send()
            .await
            .map_err(|e| RoasterError::Capture(format!("image download failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(RoasterError::Capture(format!(
                "image download returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RoasterError::Capture(format!("image body unreadable: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ScreenshotProvider for MicrolinkClient {
    #[instrument(skip(self))]
    async fn capture_url(&self, url: &str) -> Result<EncodedImage> {
        let target = parse_target_url(url).map_err(|e| RoasterError::Capture(e.to_string()))?;

        let image_url = self.lookup(target.as_str()).await.inspect_err(|e| {
            warn!(error = %e, "Microlink lookup failed");
        })?;
        debug!(image_url = %image_url, "Screenshot ready");

        let bytes = self.download(&image_url).await?;

        if bytes.is_empty() {
            return Err(RoasterError::Capture("screenshot image is empty".to_string()));
        }

        // The provider is contracted to return PNG; the upload size cap does not apply
        Ok(EncodedImage::new(BASE64.encode(&bytes), ImageMime::Png))
    }
}
