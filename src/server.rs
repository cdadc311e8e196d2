//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::AnalysisService;

/// Room for multipart boundaries and the small text fields on top of the
/// image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analysis: Arc<AnalysisService>,
}

/// Create application state from an asset loader.
///
/// An unreadable or invalid config is an error.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load(&asset_loader).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load config from {}: {e}",
            asset_loader.config_source()
        )
    })?;
    Ok(create_app_state_from_config(config))
}

/// Create application state from an already loaded config.
pub fn create_app_state_from_config(config: AppConfig) -> AppState {
    let analysis = Arc::new(AnalysisService::new(
        config.analyzer(),
        config.limits.max_upload_bytes,
    ));

    AppState {
        config: Arc::new(config),
        analysis,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .limits
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/api/analyze", post(handle_analyze))
        .route("/api/shades", get(handle_shades))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<api::AnalyzeResponse>, ApiError> {
    api::handle_analyze(State(state.analysis), multipart).await
}

async fn handle_shades(State(state): State<AppState>) -> Json<api::ShadesResponse> {
    api::handle_shades(State(state.analysis)).await
}
