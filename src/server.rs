//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::services::RenderService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<RenderService>,
}

/// Create application state from configuration.
pub fn create_app_state(config: &AppConfig) -> AppState {
    AppState {
        renderer: Arc::new(RenderService::from_config(config)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Every response carries `Cache-Control: no-store`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/image", get(api::handle_image))
        .route("/get_current_config", get(api::handle_current_config))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state.renderer)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
