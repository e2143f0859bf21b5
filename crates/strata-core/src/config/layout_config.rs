use serde::{Deserialize, Serialize};

use super::defaults;

/// Timeline layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Total layout width, in layout units. Distinct years are spaced
    /// evenly across this span by rank.
    pub width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: defaults::DEFAULT_LAYOUT_WIDTH,
        }
    }
}
