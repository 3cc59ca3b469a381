// src/api/http/handlers.rs
// JSON endpoints: roast, screenshot, health

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, info};

use crate::api::error::{
    ApiError, ApiResult, IMAGE_TOO_LARGE_MESSAGE, MISSING_IMAGE_MESSAGE, URL_REQUIRED_MESSAGE,
};
use crate::api::state::AppState;
use crate::api::types::{RoastRequest, ScreenshotRequest, ScreenshotResponse};
use crate::roast::{RoastResult, normalize};

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/roast
///
/// Validates the upload, asks the critic, and always answers a successful
/// critique with a well-formed roast (normalization never fails).
pub async fn roast_handler(
    State(state): State<AppState>,
    payload: Result<Json<RoastRequest>, JsonRejection>,
) -> ApiResult<Json<RoastResult>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(rejection = %rejection, "Unreadable roast body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large(IMAGE_TOO_LARGE_MESSAGE)
        } else {
            ApiError::bad_request(MISSING_IMAGE_MESSAGE)
        }
    })?;

    let image = request.into_image()?;
    info!(mime = %image.mime, encoded_len = image.data.len(), "Roast requested");

    let raw = state
        .critic
        .request_critique(&image)
        .await
        .map_err(|e| ApiError::from_roast_error(&e))?;

    let result = normalize(&raw);
    info!(
        slop_score = result.slop_score,
        signals = result.slop_signals.len(),
        "Roast ready"
    );

    Ok(Json(result))
}

/// POST /api/screenshot
pub async fn screenshot_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScreenshotRequest>, JsonRejection>,
) -> ApiResult<Json<ScreenshotResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(rejection = %rejection, "Unreadable screenshot body");
        ApiError::bad_request(URL_REQUIRED_MESSAGE)
    })?;

    let url = request.target()?;
    info!(url = %url, "Screenshot requested");

    let image = state
        .screenshots
        .capture_url(&url)
        .await
        .map_err(|e| ApiError::from_capture_error(&e))?;

    Ok(Json(ScreenshotResponse::from(image)))
}
