//! In-memory track storage for the catalog service.

use std::sync::Arc;

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::TrackStore;

/// Shared handle to the process-wide store.
pub type DbPool = Arc<TrackStore>;

/// Create the store handle, optionally loaded with the demo catalog.
pub fn create_pool(seed: bool) -> DbPool {
    let store = if seed {
        TrackStore::seeded()
    } else {
        TrackStore::empty()
    };
    Arc::new(store)
}
