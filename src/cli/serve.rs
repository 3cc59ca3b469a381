// src/cli/serve.rs
// Web server startup

use anyhow::Result;
use roaster::api::{AppState, create_router};
use roaster::capture::MicrolinkClient;
use roaster::config::RoasterConfig;
use roaster::http::create_shared_client;
use roaster::llm::OpenRouterClient;
use std::sync::Arc;
use tracing::info;

/// Build the clients once and serve until the process is stopped
pub async fn run_server(mut config: RoasterConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let http = create_shared_client(config.request_timeout);
    let critic = Arc::new(OpenRouterClient::new(http.clone(), config.critique.clone()));
    let screenshots = Arc::new(MicrolinkClient::new(http, config.screenshot_base_url.clone()));

    let state = AppState::new(critic, screenshots).with_config(&config);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        addr = %addr,
        share_base = %config.share_base(),
        max_body_bytes = config.max_body_bytes,
        "Roaster listening"
    );
    eprintln!("Roaster running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
