// src/llm/openrouter/response.rs
// OpenAI-compatible chat response parsing

use serde::Deserialize;
use serde_json::Value;

/// Non-streaming chat response. OpenRouter may also put an `error` object in
/// a 200 reply when the routed provider fails.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ResponseChoice>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// A string for most models, a list of text parts for a few
    #[serde(default)]
    pub content: Option<Value>,
}

/// Error envelope: `{"error": {"message": "...", "code": 429}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ProviderError,
}

#[derive(Debug, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<Value>,
}

impl ChatResponse {
    /// Text of the first choice, or None if missing or blank
    pub fn first_text(&self) -> Option<String> {
        let content = self.choices.first()?.message.content.as_ref()?;
        let text = match content {
            Value::String(s) => s.clone(),
            Value::Array(parts) => parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(""),
            _ => return None,
        };
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Provider message from an error body, if there is one
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
}
