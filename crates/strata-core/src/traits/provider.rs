use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::event::RawEvent;

/// Outcome of one provider's resolve attempt.
///
/// A tagged result instead of `Result`: adapter failures are an expected
/// part of the fallback chain, not errors to propagate. `Unavailable`
/// carries its reason for logging only; the pipeline treats it like
/// `Empty`.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// The provider produced candidate events.
    Found(Vec<RawEvent>),
    /// The provider was reachable but knows nothing about the topic.
    Empty,
    /// The provider could not be consulted (transport failure, timeout,
    /// malformed payload, missing credential).
    Unavailable { reason: String },
}

impl ResolveOutcome {
    /// `Found` with at least one candidate.
    pub fn has_candidates(&self) -> bool {
        matches!(self, ResolveOutcome::Found(events) if !events.is_empty())
    }
}

/// Every adapter failure collapses to `Unavailable` at the trait boundary.
impl From<ProviderError> for ResolveOutcome {
    fn from(err: ProviderError) -> Self {
        ResolveOutcome::Unavailable {
            reason: err.to_string(),
        }
    }
}

/// A single event source behind the uniform resolve-by-topic contract.
///
/// Implementations must never panic or return transport errors through this
/// interface; anything that goes wrong becomes `Unavailable`.
#[async_trait]
pub trait IEventProvider: Send + Sync {
    /// Look up candidate events for a topic.
    async fn resolve(&self, topic: &str) -> ResolveOutcome;

    /// Human-readable provider name, used as the event source label.
    fn name(&self) -> &str;

    /// Whether this provider can be consulted at all right now.
    fn is_available(&self) -> bool {
        true
    }
}
