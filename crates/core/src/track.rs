//! Track status, genres, id parsing and list filtering.
//!
//! These are shared by the store (`catalog-db`) and the HTTP layer
//! (`catalog-api`) so both agree on status names and on what a "matching"
//! track is.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::types::DbId;

/// Genre categories offered by the upload form. The set is open: the store
/// accepts any non-blank genre.
pub const KNOWN_GENRES: &[&str] = &[
    "Pop",
    "Rock",
    "Electronic",
    "Hip-Hop",
    "Jazz",
    "Classical",
    "Country",
    "R&B",
    "Alternative",
    "Other",
];

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle label of a track.
///
/// Serialized by variant name (`"Draft"`, `"Submitted"`, `"Published"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrackStatus {
    /// Newly created, still editable.
    #[default]
    Draft,
    /// Pending review.
    Submitted,
    /// Live.
    Published,
}

impl TrackStatus {
    pub const ALL: [TrackStatus; 3] = [
        TrackStatus::Draft,
        TrackStatus::Submitted,
        TrackStatus::Published,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrackStatus::Draft => "Draft",
            TrackStatus::Submitted => "Submitted",
            TrackStatus::Published => "Published",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Id parsing
// ---------------------------------------------------------------------------

/// Leniently parse a track id taken from a URL path segment.
///
/// Accepts optional leading whitespace, an optional sign and then reads
/// digits up to the first non-digit, so `"12abc"` yields `12`. Returns `None`
/// when no digits are present or the value does not fit in a [`DbId`];
/// callers treat `None` as "not found".
pub fn parse_track_id(raw: &str) -> Option<DbId> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: DbId = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Reject empty or whitespace-only text fields.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Status criterion of a [`TrackFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TrackStatus),
    /// The requested status name is not a known status; nothing matches.
    Unknown,
}

impl StatusFilter {
    /// `"all"` (any case) selects every status; anything else must name one.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            return StatusFilter::All;
        }
        match TrackStatus::from_name(raw) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::Unknown,
        }
    }

    fn admits(self, status: TrackStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
            StatusFilter::Unknown => false,
        }
    }
}

/// Criteria for narrowing a track listing.
///
/// A track matches when its title or artist contains the search term
/// (case-insensitive) and its status passes the [`StatusFilter`]. The
/// default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackFilter {
    search: Option<String>,
    status: StatusFilter,
}

impl TrackFilter {
    pub fn new(search: Option<&str>, status: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);
        let status = status.map(StatusFilter::parse).unwrap_or_default();
        Self { search, status }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.search.is_none() && self.status == StatusFilter::All
    }

    pub fn matches(&self, title: &str, artist: &str, status: TrackStatus) -> bool {
        let matches_search = match &self.search {
            Some(term) => {
                title.to_lowercase().contains(term) || artist.to_lowercase().contains(term)
            }
            None => true,
        };
        matches_search && self.status.admits(status)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
