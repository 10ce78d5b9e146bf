//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Click Tracking
///
/// The visit is queued on a bounded channel for asynchronous counting;
/// the redirect itself is never blocked or delayed by the counter write,
/// and a full queue drops the event (fire-and-forget).
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.redirect_service.resolve(&id).await?;

    Ok(Redirect::temporary(&target))
}
