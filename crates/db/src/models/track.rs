//! Track entity model and DTOs.

use catalog_core::track::TrackStatus;
use catalog_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A track record held by the [`TrackStore`](crate::TrackStore).
///
/// `release_date` serializes as an ISO-8601 date (`"2024-05-10"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub artist: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub status: TrackStatus,
}

/// DTO for creating a new track.
///
/// There is no `status` field: new tracks always start as
/// [`TrackStatus::Draft`] and a `status` key in the request body is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    #[validate(custom(function = "catalog_core::track::validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "catalog_core::track::validate_not_blank"))]
    pub artist: String,
    pub release_date: NaiveDate,
    #[validate(custom(function = "catalog_core::track::validate_not_blank"))]
    pub genre: String,
}
