// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use std::time::Duration;
use tracing::{debug, info, warn};

use super::{
    DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_MICROLINK_BASE_URL, DEFAULT_MODELS,
    DEFAULT_OPENROUTER_BASE_URL, DEFAULT_PORT, DEFAULT_REFERER, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_TITLE,
};

/// Completion provider settings (OpenRouter chat completions)
#[derive(Debug, Clone)]
pub struct CritiqueConfig {
    /// OPENROUTER_API_KEY
    pub api_key: Option<String>,
    /// OPENROUTER_BASE_URL
    pub base_url: String,
    /// ROASTER_MODELS, comma separated, tried in order
    pub models: Vec<String>,
    /// ROASTER_REFERER, sent as HTTP-Referer for provider attribution
    pub referer: String,
    /// ROASTER_TITLE, sent as X-Title
    pub title: String,
}

impl Default for CritiqueConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Everything the roaster reads from its environment
#[derive(Debug, Clone)]
pub struct RoasterConfig {
    pub critique: CritiqueConfig,
    /// MICROLINK_BASE_URL
    pub screenshot_base_url: String,
    /// ROASTER_HOST
    pub host: String,
    /// ROASTER_PORT
    pub port: u16,
    /// ROASTER_PUBLIC_URL, base for share links; defaults to http://host:port
    pub public_url: Option<String>,
    /// ROASTER_MAX_BODY_BYTES
    pub max_body_bytes: usize,
    /// ROASTER_REQUEST_TIMEOUT_SECS, applied to every outbound call
    pub request_timeout: Duration,
}

impl Default for RoasterConfig {
    fn default() -> Self {
        Self {
            critique: CritiqueConfig::default(),
            screenshot_base_url: DEFAULT_MICROLINK_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl RoasterConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|name| std::env::var(name).ok());
        config.log_status();
        config
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Empty values count as unset; unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let models = read("ROASTER_MODELS")
            .map(|list| parse_model_list(&list))
            .filter(|models| !models.is_empty())
            .unwrap_or(defaults.critique.models);

        let critique = CritiqueConfig {
            api_key: read("OPENROUTER_API_KEY"),
            base_url: read("OPENROUTER_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.critique.base_url),
            models,
            referer: read("ROASTER_REFERER").unwrap_or(defaults.critique.referer),
            title: read("ROASTER_TITLE").unwrap_or(defaults.critique.title),
        };

        Self {
            critique,
            screenshot_base_url: read("MICROLINK_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.screenshot_base_url),
            host: read("ROASTER_HOST").unwrap_or(defaults.host),
            port: parse_or("ROASTER_PORT", read("ROASTER_PORT"), defaults.port),
            public_url: read("ROASTER_PUBLIC_URL").map(|u| u.trim_end_matches('/').to_string()),
            max_body_bytes: parse_or(
                "ROASTER_MAX_BODY_BYTES",
                read("ROASTER_MAX_BODY_BYTES"),
                defaults.max_body_bytes,
            ),
            request_timeout: Duration::from_secs(parse_or(
                "ROASTER_REQUEST_TIMEOUT_SECS",
                read("ROASTER_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
        }
    }

    /// Base URL share links are built on
    pub fn share_base(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }

    /// Log what was picked up (without exposing the key)
    fn log_status(&self) {
        if self.critique.api_key.is_none() {
            warn!("OPENROUTER_API_KEY not set - roast requests will fail");
        } else {
            debug!("OpenRouter API key loaded");
        }
        info!(
            models = ?self.critique.models,
            base_url = %self.critique.base_url,
            "Critique provider configured"
        );
    }
}

fn parse_model_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_or<T: std::str::FromStr>(name: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(v) => v.parse().unwrap_or_else(|_| {
            warn!(name, value = %v, "Unparsable value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = RoasterConfig::from_lookup(lookup(&[]));
        assert!(config.critique.api_key.is_none());
        assert_eq!(config.critique.models.len(), DEFAULT_MODELS.len());
        assert_eq!(config.critique.models[0], DEFAULT_MODELS[0]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.share_base(), format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT));
    }

    #[test]
    fn test_values_read() {
        let config = RoasterConfig::from_lookup(lookup(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("OPENROUTER_BASE_URL", "http://127.0.0.1:9999/api/v1/"),
            ("ROASTER_MODELS", " a/one , b/two,, "),
            ("ROASTER_PORT", "8080"),
            ("ROASTER_PUBLIC_URL", "https://roast.example/"),
            ("ROASTER_REQUEST_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.critique.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.critique.base_url, "http://127.0.0.1:9999/api/v1");
        assert_eq!(config.critique.models, vec!["a/one", "b/two"]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.share_base(), "https://roast.example");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = RoasterConfig::from_lookup(lookup(&[
            ("OPENROUTER_API_KEY", "   "),
            ("ROASTER_MODELS", " , "),
        ]));
        assert!(config.critique.api_key.is_none());
        assert_eq!(config.critique.models.len(), DEFAULT_MODELS.len());
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = RoasterConfig::from_lookup(lookup(&[
            ("ROASTER_PORT", "eighty"),
            ("ROASTER_MAX_BODY_BYTES", "-1"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }
}
