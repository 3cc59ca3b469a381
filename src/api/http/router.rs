// src/api/http/router.rs
// HTTP router composition: pages at the root, JSON endpoints under /api

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::{
    handlers::{health_handler, roast_handler, screenshot_handler},
    pages::{index_handler, shared_roast_handler},
};
use crate::api::state::AppState;

/// JSON endpoints, nested under /api
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/roast", post(roast_handler))
        .route("/screenshot", post(screenshot_handler))
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let version_header = SetResponseHeaderLayer::if_not_present(
        HeaderName::from_static("x-roaster-version"),
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/r/{token}", get(shared_roast_handler))
        .nest("/api", api_router())
        // Base64 screenshots run well past axum's 2MB default
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(version_header)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
