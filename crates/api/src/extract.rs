//! Request body extractor that decodes JSON leniently and validates it.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use catalog_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON request body, decoded and validated.
///
/// Unlike `axum::Json`, the `Content-Type` header is not checked: the raw
/// body is decoded as JSON regardless. Every failure (unreadable body,
/// malformed JSON, wrong shape, failed validation) is rejected with
/// [`AppError`], which renders as `400 {"error": "Invalid request body"}`.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTrack>) -> AppResult<Json<Track>> {
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value: T =
            serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest(e.to_string()))?;

        value
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
