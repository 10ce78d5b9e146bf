//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{id}`
///
/// Read-only: never increments the counter.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.stats_service.get_link_stats(&id).await?;

    let short_url = state.link_service.get_short_url(&state.base_url, &link.id);

    Ok(Json(StatsResponse {
        id: link.id,
        long_url: link.long_url,
        short_url,
        clicks: link.clicks,
    }))
}
