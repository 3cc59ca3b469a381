// src/roast/share.rs
// Share tokens: a roast packed into a URL path segment, no storage involved

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::RoastResult;
use crate::error::DecodeError;

/// Encode a roast as an opaque, URL-safe token.
///
/// JSON, then standard base64, then percent-encoding so `+`, `/` and `=`
/// survive inside a path segment. Equal roasts always give equal tokens.
pub fn encode(result: &RoastResult) -> String {
    // Serializing a struct of strings and integers cannot fail
    let json = serde_json::to_vec(result).unwrap_or_default();
    urlencoding::encode(&BASE64.encode(json)).into_owned()
}

/// Reconstruct a roast from a share token.
///
/// Accepts tokens with or without their percent-encoding (routers often
/// decode path segments before handing them over).
pub fn decode(token: &str) -> Result<RoastResult, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let unescaped = urlencoding::decode(token).map_err(|_| DecodeError::Percent)?;
    let bytes = BASE64
        .decode(unescaped.trim().as_bytes())
        .map_err(|_| DecodeError::Base64)?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Payload(e.to_string()))?;

    // u8 would silently reject 101..=255 with a generic message, so check first
    if let Some(score) = value.get("slopScore").and_then(|s| s.as_u64()) {
        if score > 100 {
            return Err(DecodeError::ScoreOutOfRange(score));
        }
    }

    serde_json::from_value(value).map_err(|e| DecodeError::Payload(e.to_string()))
}

/// Full share link for a roast, e.g. `https://roaster.example/r/eyJj...`
pub fn share_url(base: &str, result: &RoastResult) -> String {
    format!("{}/r/{}", base.trim_end_matches('/'), encode(result))
}
