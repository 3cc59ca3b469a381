// src/roast/report.rs
// Plain-text and link renderings of a roast (copy button, score badge, share to X)

use super::RoastResult;

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Text put on the clipboard by the "copy report" action
pub fn copy_report(result: &RoastResult) -> String {
    format!(
        "COPY ROAST:\n{}\n\nDESIGN PATTERNS:\n{}\n\nFIX THIS FIRST:\n{}",
        result.copy_roast, result.design_roast, result.fix_first
    )
}

/// Human label for a slop score band
pub fn score_label(score: u8) -> &'static str {
    match score {
        0..=20 => "Surprisingly Original",
        21..=40 => "Some Personality",
        41..=60 => "Template Vibes",
        61..=80 => "Heavy AI Slop",
        _ => "Maximum Slop Detected",
    }
}

/// Gauge color for a slop score (green, yellow, pink)
pub fn score_color(score: u8) -> &'static str {
    match score {
        0..=30 => "#22c55e",
        31..=60 => "#ffd600",
        _ => "#ff0080",
    }
}

/// Pre-filled "post to X" link pointing at `link` (a share URL or the home page)
pub fn tweet_intent_url(result: &RoastResult, link: &str) -> String {
    let text = format!(
        "I just got my landing page roasted! 🔥\n\nSlop Score: {}%\n\n\"{}\"\n\nGet roasted at:",
        result.slop_score, result.fix_first
    );
    format!(
        "{}?text={}&url={}",
        TWEET_INTENT_URL,
        urlencoding::encode(&text),
        urlencoding::encode(link)
    )
}
