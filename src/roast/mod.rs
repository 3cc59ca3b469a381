// src/roast/mod.rs
// The roast result and the pure functions around it

mod normalize;
pub mod report;
pub mod share;

pub use normalize::normalize;

use serde::{Deserialize, Serialize};

/// Score used when the model gives none, or when parsing fails entirely
pub const NEUTRAL_SCORE: u8 = 50;

pub const DEFAULT_COPY_ROAST: &str = "The copy was so generic our parser fell asleep.";
pub const DEFAULT_DESIGN_ROAST: &str = "The design broke our roast machine.";
pub const DEFAULT_SLOP_SIGNAL: &str = "Generic vibe";
pub const DEFAULT_FIX_FIRST: &str = "Just start over.";

pub const PARSE_FAILED_COPY_ROAST: &str = "Error analyzing response.";
pub const PARSE_FAILED_FIX_FIRST: &str = "Try again.";
pub const PARSE_FAILED_SIGNAL: &str = "Parsing Error";
pub const SPEECHLESS_ROAST: &str = "Even our AI is speechless. That's not a good sign.";

/// A structured critique of one landing page screenshot.
///
/// Built once per critique request by [`normalize`], never mutated, and
/// serialized with the camelCase keys the browser page and share tokens use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastResult {
    pub copy_roast: String,
    pub design_roast: String,
    /// 0-100, higher means more generic / AI-templated
    pub slop_score: u8,
    pub slop_signals: Vec<String>,
    pub fix_first: String,
}

impl RoastResult {
    /// Result used when the completion could not be read as JSON at all.
    /// The raw text is kept as the design roast so nothing is dropped.
    pub fn unparsable(raw: &str) -> Self {
        let design_roast = if raw.is_empty() {
            SPEECHLESS_ROAST.to_string()
        } else {
            raw.to_string()
        };

        Self {
            copy_roast: PARSE_FAILED_COPY_ROAST.to_string(),
            design_roast,
            slop_score: NEUTRAL_SCORE,
            slop_signals: vec![PARSE_FAILED_SIGNAL.to_string()],
            fix_first: PARSE_FAILED_FIX_FIRST.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let result = RoastResult {
            copy_roast: "a".into(),
            design_roast: "b".into(),
            slop_score: 7,
            slop_signals: vec!["c".into()],
            fix_first: "d".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["copyRoast"], "a");
        assert_eq!(json["designRoast"], "b");
        assert_eq!(json["slopScore"], 7);
        assert_eq!(json["slopSignals"][0], "c");
        assert_eq!(json["fixFirst"], "d");
    }

    #[test]
    fn test_unparsable_keeps_raw_text() {
        let result = RoastResult::unparsable("I refuse to look at this page.");
        assert_eq!(result.design_roast, "I refuse to look at this page.");
        assert_eq!(result.copy_roast, PARSE_FAILED_COPY_ROAST);
        assert_eq!(result.fix_first, PARSE_FAILED_FIX_FIRST);
        assert_eq!(result.slop_score, NEUTRAL_SCORE);
        assert_eq!(result.slop_signals, vec![PARSE_FAILED_SIGNAL.to_string()]);
    }

    #[test]
    fn test_unparsable_empty_is_speechless() {
        let result = RoastResult::unparsable("");
        assert_eq!(result.design_roast, SPEECHLESS_ROAST);
    }
}
