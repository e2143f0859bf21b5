//! Default values for all configuration fields.

use chrono::{Datelike, Utc};

/// Lower bound of the valid event year range (3000 BCE).
pub const DEFAULT_YEAR_MIN: i32 = -3000;

/// Minimum cleaned title length, in characters.
pub const DEFAULT_MIN_TITLE_LEN: usize = 4;

/// Maximum description length, in characters, before truncation.
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 180;

/// Length of the lowercased title prefix used as the dedup key.
pub const DEFAULT_DEDUPE_PREFIX_LEN: usize = 24;

/// Maximum events returned per resolved topic.
pub const DEFAULT_MAX_EVENTS: usize = 15;

/// Provider-side result limit for knowledge-graph queries.
pub const DEFAULT_QUERY_LIMIT: usize = 20;

/// Number of candidate documents fetched by the encyclopedia adapter.
pub const DEFAULT_SEARCH_DOC_LIMIT: usize = 3;

/// Timeout applied to every outbound provider request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;

/// Maximum concurrent topics on the timeline.
pub const DEFAULT_MAX_TOPICS: usize = 5;

/// Total layout width, in layout units.
pub const DEFAULT_LAYOUT_WIDTH: f64 = 400.0;

/// Entry count requested from the generative backend.
pub const DEFAULT_GENERATIVE_ENTRIES: usize = 12;

/// Capacity of the per-topic generative result cache.
pub const DEFAULT_GENERATIVE_CACHE_CAPACITY: u64 = 64;

/// Upper bound of the valid event year range: the current year.
pub fn current_year() -> i32 {
    Utc::now().year()
}
