//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`     - Short link redirect (public)
//! - `GET  /health`   - Health check: database, click queue (public)
//! - `/api/*`         - JSON API (shorten, import, stats)
//! - anything else    - 404 with the standard error body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Unmatched routes get the same JSON error shape as everything else.
async fn fallback_handler() -> AppError {
    AppError::not_found("Resource not found", json!({}))
}
