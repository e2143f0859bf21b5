use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one provider tier falling through during resolution.
///
/// Never surfaced to the end user; drained from the chain for logging and
/// diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackEvent {
    /// Name of the provider that could not answer.
    pub provider: String,
    /// Why it was skipped.
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl FallbackEvent {
    pub fn now(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }
}
