use async_trait::async_trait;

use crate::models::ResolvedTopic;

/// Full topic resolution: provider chain, normalization, dedup, ordering.
///
/// The registry depends on this seam rather than on any concrete chain, so
/// tests can drive it with canned resolvers.
#[async_trait]
pub trait ITopicResolver: Send + Sync {
    /// Resolve a topic to its final event list, or `None` when every
    /// source came up empty.
    async fn resolve_topic(&mut self, topic: &str) -> Option<ResolvedTopic>;
}
