use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_db::store::StoreError;
use serde_json::json;

/// Application-level error type for JSON API handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for record store
/// failures, and adds an internal variant for auth plumbing failures. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
///
/// HTML handlers do not return this type: they catch failures and render a
/// notice instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store failure, passed through unchanged.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - A keyed write that matched nothing maps to 404.
/// - Everything else maps to 502 with a sanitized message; the store's own
///   text is logged, not returned.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, "NOT_FOUND", err.message.clone());
    }
    tracing::error!(error = %err, code = ?err.code, "Record store error");
    (
        StatusCode::BAD_GATEWAY,
        "STORE_ERROR",
        "The record store could not complete the request".to_string(),
    )
}
