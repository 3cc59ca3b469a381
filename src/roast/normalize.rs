// src/roast/normalize.rs
// Tolerant conversion of raw completion text into a RoastResult

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use super::{
    DEFAULT_COPY_ROAST, DEFAULT_DESIGN_ROAST, DEFAULT_FIX_FIRST, DEFAULT_SLOP_SIGNAL,
    NEUTRAL_SCORE, RoastResult,
};

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```json").expect("valid regex"));

/// Turn raw model output into a fully populated roast.
///
/// Never fails: missing fields get placeholders, and text with no parsable
/// JSON object becomes [`RoastResult::unparsable`].
pub fn normalize(raw: &str) -> RoastResult {
    let cleaned = strip_code_fences(raw);

    let Some(block) = extract_object_span(&cleaned) else {
        debug!("No JSON object in completion, using raw text");
        return RoastResult::unparsable(raw);
    };

    match serde_json::from_str::<Value>(block) {
        Ok(Value::Object(fields)) => from_fields(&fields),
        Ok(_) => RoastResult::unparsable(raw),
        Err(e) => {
            debug!(error = %e, "Completion JSON did not parse, using raw text");
            RoastResult::unparsable(raw)
        }
    }
}

/// Drop every ```json / ``` marker the model wrapped around its answer.
fn strip_code_fences(s: &str) -> String {
    JSON_FENCE.replace_all(s, "").replace("```", "").trim().to_string()
}

/// Span from the first `{` to the last `}`, if they are in that order.
fn extract_object_span(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let end = s.rfind('}')?;
    (end > start).then(|| &s[start..=end])
}

fn from_fields(fields: &Map<String, Value>) -> RoastResult {
    RoastResult {
        copy_roast: text_field(fields, "copyRoast", DEFAULT_COPY_ROAST),
        design_roast: text_field(fields, "designRoast", DEFAULT_DESIGN_ROAST),
        slop_score: score_field(fields.get("slopScore")),
        slop_signals: signals_field(fields.get("slopSignals")),
        fix_first: text_field(fields, "fixFirst", DEFAULT_FIX_FIRST),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str, default: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

/// Numbers past f64 range read as infinite and saturate at 0 or 100.
fn score_field(value: Option<&Value>) -> u8 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().or_else(|| n.to_string().parse::<f64>().ok()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if !n.is_nan() => n.round().clamp(0.0, 100.0) as u8,
        _ => NEUTRAL_SCORE,
    }
}

fn signals_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => vec![DEFAULT_SLOP_SIGNAL.to_string()],
    }
}
