// src/api/state.rs
// Shared state handed to every HTTP handler

use std::sync::Arc;

use crate::capture::ScreenshotProvider;
use crate::config::{DEFAULT_MAX_BODY_BYTES, RoasterConfig};
use crate::llm::CritiqueClient;

#[derive(Clone)]
pub struct AppState {
    pub critic: Arc<dyn CritiqueClient>,
    pub screenshots: Arc<dyn ScreenshotProvider>,
    /// Origin used to build absolute share links
    pub share_base: String,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(critic: Arc<dyn CritiqueClient>, screenshots: Arc<dyn ScreenshotProvider>) -> Self {
        Self {
            critic,
            screenshots,
            share_base: String::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Apply the server-facing parts of the config
    pub fn with_config(mut self, config: &RoasterConfig) -> Self {
        self.share_base = config.share_base();
        self.max_body_bytes = config.max_body_bytes;
        self
    }
}
