//! Handlers for the `/tracks` resource.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::track::{parse_track_id, KNOWN_GENRES};
use catalog_db::models::track::CreateTrack;
use catalog_db::repositories::TrackRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::TrackListParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /tracks?search=&status=
///
/// List tracks in insertion order. Without query parameters every track is
/// returned. A query string that cannot be decoded (e.g. a repeated key) is
/// ignored and the full list is returned.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<TrackListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring undecodable list query");
            TrackListParams::default()
        }
    };
    let tracks = TrackRepo::list_filtered(&state.pool, &params.to_filter()).await;
    Ok(Json(tracks))
}

/// GET /tracks/{id}
///
/// The id is parsed leniently; a segment without leading digits, or one
/// that does not decode to UTF-8, is simply not found.
pub async fn get_by_id(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let not_found = || AppError::Core(CoreError::NotFound { entity: "Track" });

    let Path(raw_id) = raw_id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable track id");
        not_found()
    })?;
    let id = parse_track_id(&raw_id).ok_or_else(not_found)?;
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(track))
}

/// POST /tracks
///
/// Create a new track. The store assigns `id` and `status` (`Draft`).
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTrack>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::create(&state.pool, &input).await;
    tracing::info!(track_id = track.id, title = %track.title, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

/// GET /genres
///
/// Genre choices offered to the upload form. Tracks may carry other genres.
pub async fn genres() -> Json<&'static [&'static str]> {
    Json(KNOWN_GENRES)
}
