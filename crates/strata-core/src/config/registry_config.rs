use serde::{Deserialize, Serialize};

use super::defaults;

/// Topic registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum concurrent topics on the timeline.
    pub max_topics: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_topics: defaults::DEFAULT_MAX_TOPICS,
        }
    }
}
