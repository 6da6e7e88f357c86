use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::track::Track;
use crate::seed::seed_tracks;

/// In-memory track collection, kept in insertion order.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application (see [`DbPool`](crate::DbPool)). Readers
/// share the lock; inserts take it exclusively so id assignment and append
/// happen as one step.
#[derive(Debug, Default)]
pub struct TrackStore {
    tracks: RwLock<Vec<Track>>,
}

impl TrackStore {
    /// Create a store with no tracks. The first insert gets id 1.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store holding the demo catalog (ids 1..=3).
    pub fn seeded() -> Self {
        Self::from_tracks(seed_tracks())
    }

    /// Create a store from existing records, kept in the given order.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            tracks: RwLock::new(tracks),
        }
    }

    /// Number of tracks currently held.
    pub async fn len(&self) -> usize {
        self.tracks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tracks.read().await.is_empty()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Vec<Track>> {
        self.tracks.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Vec<Track>> {
        self.tracks.write().await
    }
}
