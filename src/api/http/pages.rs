// src/api/http/pages.rs
// Server-rendered HTML: the upload page and the read-only shared roast view

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::{Html, IntoResponse, Response},
};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::roast::{
    RoastResult,
    report::{copy_report, score_color, score_label, tweet_intent_url},
    share,
};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

pub const INVALID_LINK_TITLE: &str = "[ INVALID_LINK ]";
pub const INVALID_LINK_MESSAGE: &str = "This roast link is broken or expired.";

const PAGE_STYLE: &str = r#"
body{margin:0;background:#0a0a0a;color:#f5f5f5;font-family:ui-monospace,Menlo,Consolas,monospace}
main{max-width:860px;margin:0 auto;padding:48px 20px}
h1{font-size:28px;letter-spacing:.04em;margin:0 0 24px}
a{color:#ff0080}
.gauge{border:2px solid #333;padding:24px;margin-bottom:24px;text-align:center}
.score{font-size:64px;font-weight:800}
.label{text-transform:uppercase;letter-spacing:.1em}
.panels{display:grid;grid-template-columns:1fr 1fr;gap:16px}
.panel{border:2px solid #333;padding:20px}
.panel h2{font-size:14px;letter-spacing:.1em;color:#aaa;margin-top:0}
.tags{display:flex;flex-wrap:wrap;gap:8px;margin:24px 0}
.tag{border:1px solid #ff0080;padding:4px 10px;font-size:13px}
.fix{border:2px solid #ffd600;padding:20px;margin-bottom:24px}
.actions{display:flex;gap:12px;flex-wrap:wrap}
.actions a,.actions button{background:#f5f5f5;color:#0a0a0a;border:0;padding:10px 16px;font:inherit;cursor:pointer;text-decoration:none}
@media(max-width:640px){.panels{grid-template-columns:1fr}}
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /r/{token}
///
/// Rendered from the token alone. Anything that fails to decode gets the
/// broken-link page, never an error body.
pub async fn shared_roast_handler(
    State(state): State<AppState>,
    token: Result<Path<String>, PathRejection>,
) -> Response {
    let decoded = match token {
        Ok(Path(token)) => share::decode(&token).map_err(|e| e.to_string()),
        // Segments that are not valid UTF-8 once unescaped
        Err(rejection) => Err(rejection.to_string()),
    };

    match decoded {
        Ok(result) => {
            info!(slop_score = result.slop_score, "Serving shared roast");
            let link = share::share_url(&state.share_base, &result);
            Html(render_shared_roast(&result, &link)).into_response()
        }
        Err(e) => {
            debug!(error = %e, "Rejected share token");
            Html(render_invalid_link()).into_response()
        }
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        text(title),
        PAGE_STYLE,
        body
    )
}

/// Full HTML for a decoded roast. `share_link` is the canonical URL of this page.
pub fn render_shared_roast(result: &RoastResult, share_link: &str) -> String {
    let tags: String = result
        .slop_signals
        .iter()
        .map(|signal| format!("<span class=\"tag\">{}</span>", text(signal)))
        .collect();

    let body = format!(
        r#"<h1>ROAST MY LANDING PAGE</h1>
<section class="gauge" style="border-color:{color}">
  <div class="score" style="color:{color}">{score}%</div>
  <div class="label">SLOP SCORE: {label}</div>
</section>
<section class="panels">
  <div class="panel"><h2>COPY ROAST</h2><p>{copy}</p></div>
  <div class="panel"><h2>DESIGN PATTERNS</h2><p>{design}</p></div>
</section>
<section class="tags">{tags}</section>
<section class="fix"><h2>FIX THIS FIRST</h2><p>{fix}</p></section>
<textarea id="report" hidden>{report}</textarea>
<section class="actions">
  <button type="button" onclick="navigator.clipboard.writeText(document.getElementById('report').value).then(()=>{{this.textContent='COPIED!'}})">COPY REPORT</button>
  <a href="{tweet}" target="_blank" rel="noopener">SHARE ON X</a>
  <a href="/">ROAST YOUR OWN</a>
</section>"#,
        color = score_color(result.slop_score),
        score = result.slop_score,
        label = text(score_label(result.slop_score)),
        copy = text(&result.copy_roast),
        design = text(&result.design_roast),
        tags = tags,
        fix = text(&result.fix_first),
        report = text(&copy_report(result)),
        tweet = attr(&tweet_intent_url(result, share_link)),
    );

    page("Roast My Landing Page - Shared Roast", &body)
}

/// The fixed page shown for undecodable share links
pub fn render_invalid_link() -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<section class=\"actions\"><a href=\"/\">ROAST A PAGE</a></section>",
        text(INVALID_LINK_TITLE),
        text(INVALID_LINK_MESSAGE)
    );
    page("Roast My Landing Page - Invalid Link", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roast() -> RoastResult {
        RoastResult {
            copy_roast: "<script>alert('x')</script> & friends".into(),
            design_roast: "Purple gradient.".into(),
            slop_score: 72,
            slop_signals: vec!["Gradient hero".into(), "<b>bold</b>".into()],
            fix_first: "Say what it does.".into(),
        }
    }

    #[test]
    fn test_shared_roast_escapes_model_text() {
        let html = render_shared_roast(&roast(), "http://localhost:3000/r/abc");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_shared_roast_shows_score_band() {
        let html = render_shared_roast(&roast(), "http://localhost:3000/r/abc");
        assert!(html.contains("72%"));
        assert!(html.contains("Heavy AI Slop"));
        assert!(html.contains(score_color(72)));
        assert!(html.contains("twitter.com/intent/tweet"));
        assert!(html.contains("COPY ROAST:"));
    }

    #[test]
    fn test_invalid_link_page() {
        let html = render_invalid_link();
        assert!(html.contains(INVALID_LINK_TITLE));
        assert!(html.contains(INVALID_LINK_MESSAGE));
    }

    #[test]
    fn test_index_is_embedded() {
        assert!(INDEX_HTML.contains("/api/roast"));
        assert!(INDEX_HTML.contains("/api/screenshot"));
    }
}
