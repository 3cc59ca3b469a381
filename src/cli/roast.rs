// src/cli/roast.rs
// One-shot roast from the terminal

use anyhow::{Context, Result};
use roaster::capture::{MicrolinkClient, ScreenshotProvider};
use roaster::config::RoasterConfig;
use roaster::http::create_shared_client;
use roaster::image::EncodedImage;
use roaster::llm::{CritiqueClient, OpenRouterClient};
use roaster::roast::{
    RoastResult, normalize,
    report::{copy_report, score_label},
    share::share_url,
};
use std::path::PathBuf;
use tracing::info;

pub async fn run_roast(
    config: RoasterConfig,
    path: Option<PathBuf>,
    url: Option<String>,
    json: bool,
    share_base: Option<String>,
) -> Result<()> {
    let http = create_shared_client(config.request_timeout);

    let image = match (path, url) {
        (_, Some(url)) => {
            info!(url = %url, "Capturing screenshot");
            MicrolinkClient::new(http.clone(), config.screenshot_base_url.clone())
                .capture_url(&url)
                .await
                .with_context(|| format!("Failed to capture {}", url))?
        }
        (Some(path), None) => EncodedImage::from_file(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("Pass a screenshot path or --url"),
    };

    let critic = OpenRouterClient::new(http, config.critique.clone());
    let raw = critic.request_critique(&image).await?;
    let result = normalize(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let base = share_base.unwrap_or_else(|| config.share_base());
        println!("{}", render_summary(&result, &share_url(&base, &result)));
    }

    Ok(())
}

/// Terminal report: score line, signals, the copy report, then the share link
pub fn render_summary(result: &RoastResult, link: &str) -> String {
    let mut out = format!(
        "SLOP SCORE: {}% ({})\n",
        result.slop_score,
        score_label(result.slop_score)
    );
    if !result.slop_signals.is_empty() {
        out.push_str(&format!("SIGNALS: {}\n", result.slop_signals.join(", ")));
    }
    out.push('\n');
    out.push_str(&copy_report(result));
    out.push_str(&format!("\n\nSHARE: {}", link));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary() {
        let result = RoastResult {
            copy_roast: "Buzzwords.".into(),
            design_roast: "Gradients.".into(),
            slop_score: 15,
            slop_signals: vec!["Hero blob".into(), "Bento grid".into()],
            fix_first: "Show the product.".into(),
        };
        let text = render_summary(&result, "http://localhost:3000/r/abc");

        assert!(text.starts_with("SLOP SCORE: 15% (Surprisingly Original)\n"));
        assert!(text.contains("SIGNALS: Hero blob, Bento grid\n"));
        assert!(text.contains("FIX THIS FIRST:\nShow the product."));
        assert!(text.ends_with("SHARE: http://localhost:3000/r/abc"));
    }

    #[test]
    fn test_render_summary_without_signals() {
        let result = RoastResult {
            slop_signals: vec![],
            ..RoastResult::unparsable("")
        };
        let text = render_summary(&result, "x");
        assert!(!text.contains("SIGNALS:"));
    }
}
