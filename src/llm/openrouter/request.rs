// src/llm/openrouter/request.rs
// OpenAI-compatible multimodal chat request

use serde::Serialize;

use crate::image::EncodedImage;
use crate::llm::prompt::{ROAST_SYSTEM_PROMPT, ROAST_USER_PROMPT};

pub const ROAST_MAX_TOKENS: u32 = 1024;
pub const ROAST_TEMPERATURE: f32 = 0.8;

/// Chat message; content is either plain text or a list of parts
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: MessageContent::Text(text.into()),
        }
    }

    /// User turn carrying an image followed by an instruction
    pub fn user_with_image(image: &EncodedImage, text: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: MessageContent::Parts(vec![
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_uri(),
                    },
                },
                ContentPart::Text { text: text.into() },
            ]),
        }
    }
}

/// Chat completion request (OpenAI-compatible format)
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    /// The fixed roast conversation for one screenshot
    pub fn roast(model: impl Into<String>, image: &EncodedImage) -> Self {
        Self::new(
            model,
            vec![
                Message::system(ROAST_SYSTEM_PROMPT),
                Message::user_with_image(image, ROAST_USER_PROMPT),
            ],
        )
        .with_max_tokens(ROAST_MAX_TOKENS)
        .with_temperature(ROAST_TEMPERATURE)
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageMime;

    #[test]
    fn test_chat_request_builder() {
        let req = ChatRequest::new("model", vec![])
            .with_max_tokens(1000)
            .with_temperature(0.5);
        assert_eq!(req.max_tokens, Some(1000));
        assert_eq!(req.temperature, Some(0.5));
    }

    #[test]
    fn test_optional_fields_skipped() {
        let json = serde_json::to_value(ChatRequest::new("m", vec![])).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_roast_request_wire_shape() {
        let image = EncodedImage::new("QUJD", ImageMime::Jpeg);
        let json = serde_json::to_value(ChatRequest::roast("google/gemini", &image)).unwrap();

        assert_eq!(json["model"], "google/gemini");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], ROAST_SYSTEM_PROMPT);

        let parts = &json["messages"][1]["content"];
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(parts[0]["type"], "image_url");
        assert_eq!(parts[0]["image_url"]["url"], "data:image/jpeg;base64,QUJD");
        assert_eq!(parts[1]["type"], "text");
        assert_eq!(parts[1]["text"], ROAST_USER_PROMPT);
    }
}
