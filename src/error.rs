//! Application error type and HTTP error responses.
//!
//! Every error renders as JSON: `{ "error": { "code", "message", "details" } }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Wire representation of an error, also embedded in per-record batch
/// outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into its wire representation, for embedding in
    /// batch result items.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Classifies a sqlx error into an [`AppError`].
///
/// Unique constraint violations become [`AppError::Conflict`] so callers
/// can resolve identifier collisions; anything else is an internal
/// storage failure.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "cause": db.message() }),
            );
        }
    }

    AppError::internal("Database error", json!({ "cause": e.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_uses_message() {
        let err = AppError::bad_request("URL must not be empty", json!({}));
        assert_eq!(err.to_string(), "URL must not be empty");
    }

    #[test]
    fn test_error_info_carries_code_and_details() {
        let err = AppError::not_found("Unknown id", json!({ "id": "abc123" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Unknown id");
        assert_eq!(info.details["id"], "abc123");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::bad_request("m", json!({})).code(),
            "validation_error"
        );
        assert_eq!(AppError::not_found("m", json!({})).code(), "not_found");
        assert_eq!(AppError::conflict("m", json!({})).code(), "conflict");
        assert_eq!(AppError::internal("m", json!({})).code(), "internal_error");
    }
}
