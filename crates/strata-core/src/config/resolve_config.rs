use serde::{Deserialize, Serialize};

use super::defaults;

/// Resolution pipeline configuration: validation bounds, cleaning limits,
/// dedup key length, and outbound request policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Earliest acceptable event year (negative = BCE).
    pub year_min: i32,
    /// Latest acceptable event year.
    pub year_max: i32,
    /// Minimum cleaned title length, in characters.
    pub min_title_len: usize,
    /// Maximum description length, in characters.
    pub max_description_len: usize,
    /// Lowercased title prefix length for the dedup key.
    pub dedupe_prefix_len: usize,
    /// Maximum events returned per resolved topic.
    pub max_events: usize,
    /// Provider-side result limit for knowledge-graph queries.
    pub query_limit: usize,
    /// Candidate documents fetched by the encyclopedia adapter.
    pub search_doc_limit: usize,
    /// Timeout for every outbound provider request (seconds).
    pub request_timeout_secs: u64,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            year_min: defaults::DEFAULT_YEAR_MIN,
            year_max: defaults::current_year(),
            min_title_len: defaults::DEFAULT_MIN_TITLE_LEN,
            max_description_len: defaults::DEFAULT_MAX_DESCRIPTION_LEN,
            dedupe_prefix_len: defaults::DEFAULT_DEDUPE_PREFIX_LEN,
            max_events: defaults::DEFAULT_MAX_EVENTS,
            query_limit: defaults::DEFAULT_QUERY_LIMIT,
            search_doc_limit: defaults::DEFAULT_SEARCH_DOC_LIMIT,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
