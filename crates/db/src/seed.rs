//! Demo catalog loaded into a fresh store.

use catalog_core::track::TrackStatus;
use catalog_core::types::DbId;
use chrono::NaiveDate;

use crate::models::track::Track;

/// The three tracks a seeded store starts with, ids 1..=3.
pub fn seed_tracks() -> Vec<Track> {
    vec![
        seed_track(
            1,
            "Dreamscape",
            "Aria Smith",
            (2024, 5, 10),
            "Pop",
            TrackStatus::Published,
        ),
        seed_track(
            2,
            "Midnight Beats",
            "DJ Raven",
            (2024, 6, 22),
            "Electronic",
            TrackStatus::Draft,
        ),
        seed_track(
            3,
            "Echoes of Tomorrow",
            "Liam Grey",
            (2024, 7, 1),
            "Rock",
            TrackStatus::Submitted,
        ),
    ]
}

fn seed_track(
    id: DbId,
    title: &str,
    artist: &str,
    (year, month, day): (i32, u32, u32),
    genre: &str,
    status: TrackStatus,
) -> Track {
    Track {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        release_date: NaiveDate::from_ymd_opt(year, month, day)
            .expect("seed release dates are valid calendar dates"),
        genre: genre.to_string(),
        status,
    }
}
