// src/cli/decode.rs
// Inspect a share token without starting the server

use anyhow::Result;
use roaster::roast::{
    report::{copy_report, score_label},
    share,
};

/// Accepts a bare token or a whole `.../r/<token>` link
pub fn token_from_arg(arg: &str) -> &str {
    let arg = arg.trim();
    // Base64 never contains ':', so only links are split
    arg.split_once("://")
        .and_then(|(_, rest)| rest.split_once("/r/"))
        .map(|(_, token)| token.trim_end_matches('/'))
        .unwrap_or(arg)
}

pub fn run_decode(token: &str) -> Result<()> {
    match share::decode(token_from_arg(token)) {
        Ok(result) => {
            println!(
                "SLOP SCORE: {}% ({})\n\n{}",
                result.slop_score,
                score_label(result.slop_score),
                copy_report(&result)
            );
            Ok(())
        }
        Err(e) => anyhow::bail!("invalid link: {}", e),
    }
}
