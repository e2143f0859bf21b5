//! The resolution chain: providers in priority order with graceful
//! fallback.
//!
//! Tries each tier in turn; the first tier whose candidates survive
//! normalization and dedup wins and lower tiers are never consulted.
//! `Unavailable` tiers are logged as fallback events and skipped; no
//! provider failure ever terminates a topic resolution.

use async_trait::async_trait;
use strata_core::config::{ResolveConfig, StrataConfig};
use strata_core::constants::MAX_CANDIDATES_PER_TOPIC;
use strata_core::dedupe::dedupe;
use strata_core::errors::ProviderError;
use strata_core::models::{FallbackEvent, ResolvedTopic};
use strata_core::normalize::normalize;
use strata_core::{Event, IEventProvider, ITopicResolver, ResolveOutcome};
use tracing::{debug, info, warn};

use crate::curated::CuratedProvider;
use crate::encyclopedia::{EncyclopediaProvider, MediaWikiClient};
use crate::generative::{ChatCompletionBackend, GenerativeProvider, ICompletionBackend};
use crate::knowledge_graph::{KnowledgeGraphProvider, SparqlHttpClient};
use crate::sample::SampleProvider;

/// Ordered provider chain with fallback logging.
pub struct ResolutionChain {
    providers: Vec<Box<dyn IEventProvider>>,
    /// Accumulated fallback events for the current session.
    fallbacks: Vec<FallbackEvent>,
    config: ResolveConfig,
}

impl ResolutionChain {
    /// Create an empty chain; providers are tried in push order.
    pub fn new(config: ResolveConfig) -> Self {
        Self {
            providers: Vec::new(),
            fallbacks: Vec::new(),
            config,
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEventProvider>) {
        self.providers.push(provider);
    }

    /// Name of the first provider that reports itself available.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain accumulated fallback events.
    pub fn drain_fallbacks(&mut self) -> Vec<FallbackEvent> {
        std::mem::take(&mut self.fallbacks)
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolve a topic through the chain.
    ///
    /// Returns the first tier's normalized, deduplicated, chronologically
    /// sorted events, capped at the configured display count, or `None`
    /// when every tier came up empty.
    pub async fn resolve(&mut self, topic: &str) -> Option<ResolvedTopic> {
        let topic = topic.trim();

        for provider in &self.providers {
            if !provider.is_available() {
                continue;
            }

            match provider.resolve(topic).await {
                ResolveOutcome::Found(mut candidates) => {
                    candidates.truncate(MAX_CANDIDATES_PER_TOPIC);
                    let events: Vec<Event> = candidates
                        .iter()
                        .filter_map(|raw| normalize(raw, topic, provider.name(), &self.config))
                        .collect();
                    let mut events = dedupe(events, self.config.dedupe_prefix_len);

                    if events.is_empty() {
                        // Every candidate was rejected, treat like Empty.
                        debug!(
                            provider = provider.name(),
                            topic, "all candidates rejected, trying next tier"
                        );
                        continue;
                    }

                    events.sort_by_key(Event::year);
                    events.truncate(self.config.max_events);

                    info!(
                        topic,
                        source = provider.name(),
                        events = events.len(),
                        "topic resolved"
                    );
                    return Some(ResolvedTopic {
                        topic: topic.to_string(),
                        source: provider.name().to_string(),
                        events,
                    });
                }
                ResolveOutcome::Empty => {
                    debug!(provider = provider.name(), topic, "no results, trying next tier");
                }
                ResolveOutcome::Unavailable { reason } => {
                    warn!(
                        provider = provider.name(),
                        topic,
                        reason = %reason,
                        "provider unavailable, trying next tier"
                    );
                    self.fallbacks
                        .push(FallbackEvent::now(provider.name(), reason));
                }
            }
        }

        info!(topic, "every provider tier came up empty");
        None
    }
}

#[async_trait]
impl ITopicResolver for ResolutionChain {
    async fn resolve_topic(&mut self, topic: &str) -> Option<ResolvedTopic> {
        self.resolve(topic).await
    }
}

/// Build the standard five-tier chain:
/// curated → knowledge graph → encyclopedia → generative → samples.
pub fn default_chain(config: &StrataConfig) -> Result<ResolutionChain, ProviderError> {
    let timeout = config.resolve.request_timeout_secs;
    let mut chain = ResolutionChain::new(config.resolve.clone());

    chain.push(Box::new(CuratedProvider::new()));
    chain.push(Box::new(KnowledgeGraphProvider::new(
        Box::new(SparqlHttpClient::new(
            SparqlHttpClient::DEFAULT_ENDPOINT,
            timeout,
        )?),
        config.resolve.clone(),
    )));
    chain.push(Box::new(EncyclopediaProvider::new(
        Box::new(MediaWikiClient::new(MediaWikiClient::DEFAULT_API_URL, timeout)?),
        config.resolve.clone(),
    )));

    let backend: Option<Box<dyn ICompletionBackend>> = if config.generative.backend_configured() {
        Some(Box::new(ChatCompletionBackend::new(
            config.generative.clone(),
            timeout,
        )?))
    } else {
        None
    };
    chain.push(Box::new(GenerativeProvider::new(
        backend,
        config.resolve.clone(),
        &config.generative,
    )));
    chain.push(Box::new(SampleProvider::new()));

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use strata_core::RawEvent;

    use super::*;

    /// A mock provider that always reports unavailable.
    struct UnavailableProvider {
        name: String,
    }

    #[async_trait]
    impl IEventProvider for UnavailableProvider {
        async fn resolve(&self, _topic: &str) -> ResolveOutcome {
            ResolveOutcome::Unavailable {
                reason: "mock outage".to_string(),
            }
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    /// A mock provider that always comes up empty.
    struct EmptyProvider;

    #[async_trait]
    impl IEventProvider for EmptyProvider {
        async fn resolve(&self, _topic: &str) -> ResolveOutcome {
            ResolveOutcome::Empty
        }

        fn name(&self) -> &str {
            "empty-mock"
        }
    }

    /// A mock provider with canned candidates.
    struct CannedProvider {
        name: String,
        candidates: Vec<RawEvent>,
    }

    #[async_trait]
    impl IEventProvider for CannedProvider {
        async fn resolve(&self, _topic: &str) -> ResolveOutcome {
            ResolveOutcome::Found(self.candidates.clone())
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn canned(name: &str, candidates: Vec<RawEvent>) -> Box<CannedProvider> {
        Box::new(CannedProvider {
            name: name.to_string(),
            candidates,
        })
    }

    fn chain() -> ResolutionChain {
        ResolutionChain::new(ResolveConfig::default())
    }

    #[tokio::test]
    async fn first_tier_with_events_wins() {
        let mut chain = chain();
        chain.push(canned(
            "primary",
            vec![RawEvent::from_year(1914, "Primary Event", "from tier one")],
        ));
        chain.push(canned(
            "secondary",
            vec![RawEvent::from_year(1939, "Secondary Event", "never reached")],
        ));

        let resolved = chain.resolve("anything").await.unwrap();
        assert_eq!(resolved.source, "primary");
        assert_eq!(resolved.events.len(), 1);
        assert!(chain.drain_fallbacks().is_empty());
    }

    #[tokio::test]
    async fn unavailable_tier_falls_through_and_is_recorded() {
        let mut chain = chain();
        chain.push(Box::new(UnavailableProvider {
            name: "flaky".to_string(),
        }));
        chain.push(canned(
            "backup",
            vec![RawEvent::from_year(1969, "Backup Event", "from tier two")],
        ));

        let resolved = chain.resolve("anything").await.unwrap();
        assert_eq!(resolved.source, "backup");

        let fallbacks = chain.drain_fallbacks();
        assert_eq!(fallbacks.len(), 1);
        assert_eq!(fallbacks[0].provider, "flaky");
        assert_eq!(fallbacks[0].reason, "mock outage");
    }

    #[tokio::test]
    async fn empty_tier_falls_through_without_fallback_event() {
        let mut chain = chain();
        chain.push(Box::new(EmptyProvider));
        chain.push(canned(
            "backup",
            vec![RawEvent::from_year(1969, "Backup Event", "reached")],
        ));

        let resolved = chain.resolve("anything").await.unwrap();
        assert_eq!(resolved.source, "backup");
        assert!(chain.drain_fallbacks().is_empty());
    }

    #[tokio::test]
    async fn all_tiers_exhausted_returns_none() {
        let mut chain = chain();
        chain.push(Box::new(UnavailableProvider {
            name: "first".to_string(),
        }));
        chain.push(Box::new(EmptyProvider));

        assert!(chain.resolve("anything").await.is_none());
        assert_eq!(chain.drain_fallbacks().len(), 1);
    }

    #[tokio::test]
    async fn results_are_sorted_deduplicated_and_capped() {
        let mut candidates = vec![
            RawEvent::from_year(1945, "Victory Declared", "end"),
            RawEvent::from_year(1914, "Fighting Breaks Out Everywhere In Europe", "start"),
            RawEvent::from_year(1914, "Fighting Breaks Out Everywhere At Once", "same 24-char prefix"),
        ];
        // Pad far past the display cap.
        for year in 1950..2000 {
            candidates.push(RawEvent::from_year(
                year,
                format!("Padding Event {year}"),
                "filler",
            ));
        }

        let mut chain = chain();
        chain.push(canned("bulk", candidates));

        let resolved = chain.resolve("anything").await.unwrap();
        assert_eq!(resolved.events.len(), ResolveConfig::default().max_events);
        assert_eq!(resolved.events[0].year(), 1914);
        let years: Vec<i32> = resolved.events.iter().map(Event::year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
        // The two 1914 candidates share a 24-char title prefix, so one survives.
        assert_eq!(years.iter().filter(|y| **y == 1914).count(), 1);
    }

    #[tokio::test]
    async fn tier_with_only_invalid_candidates_falls_through() {
        let mut chain = chain();
        chain.push(canned(
            "junk",
            vec![
                RawEvent::from_year(99999, "Out of Range", "rejected"),
                RawEvent::from_date("someday", "Unparseable Date", None),
            ],
        ));
        chain.push(canned(
            "clean",
            vec![RawEvent::from_year(1957, "Clean Event", "accepted")],
        ));

        let resolved = chain.resolve("anything").await.unwrap();
        assert_eq!(resolved.source, "clean");
        // Rejected records are not provider failures.
        assert!(chain.drain_fallbacks().is_empty());
    }

    #[tokio::test]
    async fn events_carry_the_winning_tier_as_source() {
        let mut chain = chain();
        chain.push(canned(
            "labeled",
            vec![RawEvent::from_year(1914, "Labeled Event", "check provenance")],
        ));

        let resolved = chain.resolve("anything").await.unwrap();
        assert!(resolved.events.iter().all(|e| e.source() == "labeled"));
    }

    #[test]
    fn default_chain_has_five_tiers_in_priority_order() {
        let chain = default_chain(&StrataConfig::default()).unwrap();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.active_provider_name(), "curated-dataset");
    }

    #[tokio::test]
    async fn topic_whitespace_is_trimmed_before_resolution() {
        let mut chain = chain();
        chain.push(canned(
            "any",
            vec![RawEvent::from_year(1914, "Trimmed Topic Event", "check")],
        ));
        let resolved = chain.resolve("  world wars  ").await.unwrap();
        assert_eq!(resolved.topic, "world wars");
    }
}
