//! Repository for the in-memory track collection.

use catalog_core::track::{TrackFilter, TrackStatus};
use catalog_core::types::DbId;

use crate::models::track::{CreateTrack, Track};
use crate::store::TrackStore;

/// Provides list, lookup and insert operations for tracks.
///
/// Every method returns owned copies; callers never hold references into
/// the store.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the stored copy.
    ///
    /// The id is one more than the largest id present (1 for an empty
    /// store) and the status is always [`TrackStatus::Draft`]. Both the id
    /// computation and the append happen under the write lock.
    pub async fn create(store: &TrackStore, input: &CreateTrack) -> Track {
        let mut tracks = store.write().await;
        let id = next_id(&tracks);
        let track = Track {
            id,
            title: input.title.clone(),
            artist: input.artist.clone(),
            release_date: input.release_date,
            genre: input.genre.clone(),
            status: TrackStatus::Draft,
        };
        tracks.push(track.clone());
        tracing::debug!(track_id = id, total = tracks.len(), "Track inserted");
        track
    }

    /// Find a track by its id.
    pub async fn find_by_id(store: &TrackStore, id: DbId) -> Option<Track> {
        store.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// List all tracks in insertion order.
    pub async fn list(store: &TrackStore) -> Vec<Track> {
        store.read().await.clone()
    }

    /// List tracks matching `filter`, preserving insertion order.
    pub async fn list_filtered(store: &TrackStore, filter: &TrackFilter) -> Vec<Track> {
        if filter.is_unrestricted() {
            return Self::list(store).await;
        }
        store
            .read()
            .await
            .iter()
            .filter(|t| filter.matches(&t.title, &t.artist, t.status))
            .cloned()
            .collect()
    }
}

fn next_id(tracks: &[Track]) -> DbId {
    tracks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn new_track(title: &str) -> CreateTrack {
        CreateTrack {
            title: title.to_string(),
            artist: "X".to_string(),
            release_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            genre: "Jazz".to_string(),
        }
    }

    #[tokio::test]
    async fn list_returns_seed_in_insertion_order() {
        let store = TrackStore::seeded();
        let titles: Vec<_> = TrackRepo::list(&store)
            .await
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["Dreamscape", "Midnight Beats", "Echoes of Tomorrow"]);
    }

    #[tokio::test]
    async fn list_is_a_snapshot() {
        let store = TrackStore::seeded();
        let mut snapshot = TrackRepo::list(&store).await;
        snapshot.clear();
        assert_eq!(TrackRepo::list(&store).await.len(), 3);
    }

    #[tokio::test]
    async fn list_is_stable_without_inserts() {
        let store = TrackStore::seeded();
        assert_eq!(TrackRepo::list(&store).await, TrackRepo::list(&store).await);
    }

    #[tokio::test]
    async fn find_by_id_hits_and_misses() {
        let store = TrackStore::seeded();
        let track = TrackRepo::find_by_id(&store, 2).await.unwrap();
        assert_eq!(track.title, "Midnight Beats");
        assert_matches!(TrackRepo::find_by_id(&store, 999).await, None);
        assert_matches!(TrackRepo::find_by_id(&store, 0).await, None);
        assert_matches!(TrackRepo::find_by_id(&store, -1).await, None);
    }

    #[tokio::test]
    async fn repeated_misses_have_no_side_effects() {
        let store = TrackStore::seeded();
        let before = TrackRepo::list(&store).await;
        for _ in 0..3 {
            assert!(TrackRepo::find_by_id(&store, 42).await.is_none());
        }
        assert_eq!(TrackRepo::list(&store).await, before);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_draft_status() {
        let store = TrackStore::seeded();
        let track = TrackRepo::create(&store, &new_track("New Song")).await;
        assert_eq!(track.id, 4);
        assert_eq!(track.status, TrackStatus::Draft);
        assert_eq!(track.title, "New Song");
        assert_eq!(track.genre, "Jazz");
    }

    #[tokio::test]
    async fn ids_increase_by_one_per_insert() {
        let store = TrackStore::seeded();
        let mut previous = 3;
        for n in 0..5 {
            let track = TrackRepo::create(&store, &new_track(&format!("Song {n}"))).await;
            assert_eq!(track.id, previous + 1);
            previous = track.id;
        }
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = TrackStore::empty();
        let track = TrackRepo::create(&store, &new_track("First")).await;
        assert_eq!(track.id, 1);
    }

    #[tokio::test]
    async fn next_id_follows_the_largest_id_not_the_count() {
        let mut seed = crate::seed::seed_tracks();
        seed[1].id = 10;
        let store = TrackStore::from_tracks(seed);
        let track = TrackRepo::create(&store, &new_track("After gap")).await;
        assert_eq!(track.id, 11);
    }

    #[tokio::test]
    async fn created_track_is_readable_and_last_in_list() {
        let store = TrackStore::seeded();
        let created = TrackRepo::create(&store, &new_track("Readback")).await;

        assert_eq!(TrackRepo::find_by_id(&store, created.id).await, Some(created.clone()));
        let all = TrackRepo::list(&store).await;
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(TrackStore::seeded());
        let handles: Vec<_> = (0..32)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    TrackRepo::create(&store, &new_track(&format!("Parallel {n}"))).await.id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (4..36).collect::<Vec<_>>());
        assert_eq!(store.len().await, 35);
    }

    #[tokio::test]
    async fn list_filtered_by_search_and_status() {
        let store = TrackStore::seeded();

        let by_artist = TrackRepo::list_filtered(&store, &TrackFilter::new(Some("grey"), None)).await;
        assert_eq!(by_artist.len(), 1);
        assert_eq!(by_artist[0].id, 3);

        let drafts = TrackRepo::list_filtered(&store, &TrackFilter::new(None, Some("draft"))).await;
        assert_eq!(drafts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

        let none = TrackRepo::list_filtered(&store, &TrackFilter::new(Some("beats"), Some("Published")))
            .await;
        assert!(none.is_empty());

        let all = TrackRepo::list_filtered(&store, &TrackFilter::default()).await;
        assert_eq!(all, TrackRepo::list(&store).await);
    }
}
