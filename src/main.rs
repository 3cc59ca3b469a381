// src/main.rs
// Roaster - landing page critique server and CLI

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use roaster::config::RoasterConfig;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (global first, then project - project overrides)
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".roaster/.env"));
    }
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Server logs at INFO; one-shot commands stay quiet unless asked
    let default_level = match &cli.command {
        None | Some(Commands::Serve { .. }) => Level::INFO,
        Some(Commands::Roast { .. }) | Some(Commands::Decode { .. }) => Level::WARN,
    };
    let log_level = std::env::var("ROASTER_LOG_LEVEL")
        .ok()
        .and_then(|level| Level::from_str(level.trim()).ok())
        .unwrap_or(default_level);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => {
            cli::run_server(RoasterConfig::from_env(), None, None).await?;
        }
        Some(Commands::Serve { host, port }) => {
            cli::run_server(RoasterConfig::from_env(), host, port).await?;
        }
        Some(Commands::Roast {
            path,
            url,
            json,
            share_base,
        }) => {
            cli::run_roast(RoasterConfig::from_env(), path, url, json, share_base).await?;
        }
        Some(Commands::Decode { token }) => {
            cli::run_decode(&token)?;
        }
    }

    Ok(())
}
