//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a single long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "alias": "my-link"   // optional
/// }
/// ```
///
/// # Behavior
///
/// Repeating a request for the same URL without an alias returns the
/// existing mapping. A requested alias that is already taken is silently
/// replaced with a generated identifier; the response carries whichever
/// identifier was stored.
///
/// # Response
///
/// ```json
/// {
///   "id": "abc123",
///   "long_url": "https://example.com/some/long/path",
///   "short_url": "http://localhost:3001/abc123"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or empty.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state
        .link_service
        .shorten(payload.url.unwrap_or_default(), payload.alias)
        .await?;

    let short_url = state.link_service.get_short_url(&state.base_url, &link.id);

    Ok(Json(ShortenResponse {
        id: link.id,
        long_url: link.long_url,
        short_url,
    }))
}
