use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use serde_json::json;

/// Message returned for every request body that cannot be decoded or
/// fails validation.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error": "..." }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be used. The detail is logged, never
    /// returned to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(detail) => {
                    tracing::warn!(detail = %detail, "Rejected request body");
                    (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.to_string())
                }
            },
            AppError::BadRequest(detail) => {
                tracing::warn!(detail = %detail, "Rejected request body");
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
