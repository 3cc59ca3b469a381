// src/llm/mod.rs
// Critique requester: one screenshot in, raw completion text out

pub mod openrouter;
pub mod prompt;

pub use openrouter::OpenRouterClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::image::EncodedImage;

/// Anything that can turn a screenshot into raw roast text.
///
/// The returned text is unvalidated model output; run it through
/// [`crate::roast::normalize`] before showing it to anyone.
#[async_trait]
pub trait CritiqueClient: Send + Sync {
    async fn request_critique(&self, image: &EncodedImage) -> Result<String>;
}
