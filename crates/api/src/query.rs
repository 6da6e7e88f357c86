//! Query parameter types for API handlers.

use catalog_core::track::TrackFilter;
use serde::Deserialize;

/// Optional list filters (`?search=&status=`).
///
/// `search` matches title or artist, case-insensitively. `status` is `all`
/// or a status name in any case.
#[derive(Debug, Default, Deserialize)]
pub struct TrackListParams {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl TrackListParams {
    pub fn to_filter(&self) -> TrackFilter {
        TrackFilter::new(self.search.as_deref(), self.status.as_deref())
    }
}
