use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative fallback backend configuration.
///
/// The backend is only consulted when `api_key` is present; credential
/// sourcing (env vars, key files) is the embedding application's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerativeConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Bearer credential. `None` disables the backend entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier passed to the backend.
    pub model: String,
    /// Number of events requested per topic.
    pub max_entries: usize,
    /// Capacity of the per-topic result cache.
    pub cache_capacity: u64,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_entries: defaults::DEFAULT_GENERATIVE_ENTRIES,
            cache_capacity: defaults::DEFAULT_GENERATIVE_CACHE_CAPACITY,
        }
    }
}

impl GenerativeConfig {
    /// Whether a backend credential is configured.
    pub fn backend_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
