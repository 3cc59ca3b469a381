// src/llm/openrouter/mod.rs
// OpenRouter critique client with ordered model fallback

mod request;
mod response;

pub use request::{ChatRequest, ContentPart, ImageUrl, Message, MessageContent};
pub use response::{ChatResponse, error_message};

use async_trait::async_trait;
use std::time::Instant;
use tracing::{info, instrument, warn};

use super::CritiqueClient;
use crate::config::CritiqueConfig;
use crate::error::{Result, RoasterError};
use crate::image::EncodedImage;

/// Critique requester backed by OpenRouter chat completions
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: CritiqueConfig,
}

impl OpenRouterClient {
    pub fn new(http: reqwest::Client, config: CritiqueConfig) -> Self {
        Self { http, config }
    }

    pub fn models(&self) -> &[String] {
        &self.config.models
    }

    /// One attempt against one model. Empty completions count as failures.
    async fn complete_with_model(
        &self,
        api_key: &str,
        model: &str,
        image: &EncodedImage,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest::roast(model, image);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| format!("API request to {} failed", model));
            return Err(RoasterError::upstream_with_status(message, status.as_u16()));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            RoasterError::upstream(format!("Unreadable response from {}: {}", model, e))
        })?;

        if let Some(error) = parsed.error.as_ref() {
            let message = error
                .message
                .clone()
                .unwrap_or_else(|| format!("API request to {} failed", model));
            let status = error
                .code
                .as_ref()
                .and_then(|c| c.as_u64())
                .and_then(|c| u16::try_from(c).ok());
            return Err(RoasterError::Upstream { message, status });
        }

        parsed
            .first_text()
            .ok_or_else(|| RoasterError::upstream(format!("{} returned an empty completion", model)))
    }
}

#[async_trait]
impl CritiqueClient for OpenRouterClient {
    #[instrument(skip(self, image), fields(request_id = %uuid::Uuid::new_v4(), mime = %image.mime))]
    async fn request_critique(&self, image: &EncodedImage) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| RoasterError::Config("OPENROUTER_API_KEY is not set".to_string()))?;

        let mut last_error = None;

        for model in &self.config.models {
            let start = Instant::now();
            info!(model = %model, "Attempting roast");

            match self.complete_with_model(api_key, model, image).await {
                Ok(text) => {
                    info!(
                        model = %model,
                        duration_ms = start.elapsed().as_millis() as u64,
                        chars = text.len(),
                        "Roast generated"
                    );
                    return Ok(text);
                }
                Err(e) => {
                    warn!(model = %model, error = %e, "Model failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| RoasterError::Config("no critique models configured".to_string())))
    }
}
