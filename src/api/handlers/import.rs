//! Handler for the bulk import endpoint.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::api::dto::import::{ImportRequest, ImportResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Imports a batch of URL records.
///
/// # Endpoint
///
/// `POST /api/import`
///
/// # Request Body
///
/// ```json
/// {
///   "records": [
///     { "longUrl": "https://example.com/a" },
///     { "longUrl": "https://example.com/b", "alias": "promo" }
///   ]
/// }
/// ```
///
/// # Batch Processing
///
/// Records are processed sequentially and independently; one bad record
/// never aborts the batch. Each item in the response is tagged
/// `imported`, `skipped`, or `failed`. Only a body that does not parse as
/// a batch of records at all fails the whole call.
///
/// # Errors
///
/// Returns 400 Bad Request when the body is not a valid batch.
pub async fn import_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ImportResponse>, AppError> {
    // Explicit decode so shape errors surface as a malformed-batch
    // validation error before any record is processed.
    let request: ImportRequest = serde_json::from_value(payload).map_err(|e| {
        AppError::bad_request("Malformed batch", json!({ "reason": e.to_string() }))
    })?;

    let report = state.import_service.import(request.records).await;

    let response = ImportResponse::from_report(report, |id| {
        state.link_service.get_short_url(&state.base_url, id)
    });

    Ok(Json(response))
}
