//! API route configuration.

use crate::api::handlers::{import_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `POST /shorten`     - Create a shortened URL
/// - `POST /import`      - Bulk import a batch of URL records
/// - `GET  /stats/{id}`  - Statistics for a specific link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/import", post(import_handler))
        .route("/stats/{id}", get(stats_handler))
}
