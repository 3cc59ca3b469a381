// src/config/mod.rs
// Configuration defaults and env loading

mod env;

pub use env::{CritiqueConfig, RoasterConfig};

/// Free-tier vision models, tried in this order until one answers
pub const DEFAULT_MODELS: &[&str] = &[
    "google/gemini-2.0-flash-exp:free",
    "google/gemini-2.0-flash-thinking-exp:free",
    "google/gemini-exp-1206:free",
    "meta-llama/llama-3.2-90b-vision-instruct:free",
];

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MICROLINK_BASE_URL: &str = "https://api.microlink.io";
pub const DEFAULT_REFERER: &str = "http://localhost:3000";
pub const DEFAULT_TITLE: &str = "Roast My Landing Page";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Fits a 5 MiB image after base64 inflation plus the JSON envelope
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
