//! The topic registry: the single owner of all resolved topics.
//!
//! An explicit value constructed with its capacity and owned by the
//! caller — never an ambient singleton. All mutation is single-writer:
//! one add or remove runs to completion before the next.

use serde::Serialize;
use strata_core::config::RegistryConfig;
use strata_core::constants::PALETTE_SIZE;
use strata_core::errors::RegistryError;
use strata_core::normalize::topic_key;
use strata_core::{Event, ITopicResolver, StrataResult};
use tracing::{debug, info};

/// A resolved topic on the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    name: String,
    key: String,
    color_slot: usize,
    source: String,
    events: Vec<Event>,
}

#[cfg(test)]
impl Topic {
    /// Unit-test constructor; production topics only come out of
    /// [`TopicRegistry::add`].
    pub(crate) fn for_tests(name: &str, color_slot: usize, events: Vec<Event>) -> Self {
        Self {
            name: name.to_string(),
            key: topic_key(name),
            color_slot,
            source: "test".to_string(),
            events,
        }
    }
}

impl Topic {
    /// Display name, as the user entered it (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized uniqueness key (lower-cased, trimmed).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Palette slot assigned at insertion. Presentational, but stable for
    /// the topic's lifetime so layout callers have a per-topic identity.
    pub fn color_slot(&self) -> usize {
        self.color_slot
    }

    /// Provider tier that produced the events.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Events, chronologically ascending.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

/// Bounded, insertion-ordered mapping from normalized topic name to topic.
pub struct TopicRegistry {
    topics: Vec<Topic>,
    config: RegistryConfig,
}

impl TopicRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            topics: Vec::new(),
            config,
        }
    }

    /// Add a topic by resolving it through the given resolver.
    ///
    /// Validation runs before the resolver is consulted: duplicate
    /// (case-insensitive) names and over-capacity adds fail without any
    /// network traffic. An empty resolution leaves the registry untouched
    /// and reports `NoDataFound`.
    pub async fn add(
        &mut self,
        name: &str,
        resolver: &mut dyn ITopicResolver,
    ) -> StrataResult<&Topic> {
        let display_name = name.trim();
        let key = topic_key(display_name);

        if self.topics.iter().any(|t| t.key == key) {
            return Err(RegistryError::AlreadyExists {
                name: display_name.to_string(),
            }
            .into());
        }
        if self.topics.len() >= self.config.max_topics {
            return Err(RegistryError::CapacityExceeded {
                capacity: self.config.max_topics,
            }
            .into());
        }

        let resolved = resolver
            .resolve_topic(display_name)
            .await
            .filter(|r| !r.events.is_empty())
            .ok_or_else(|| RegistryError::NoDataFound {
                topic: display_name.to_string(),
            })?;

        let color_slot = self.topics.len() % PALETTE_SIZE;
        info!(
            topic = %display_name,
            source = %resolved.source,
            events = resolved.events.len(),
            color_slot,
            "topic added to timeline"
        );
        self.topics.push(Topic {
            name: display_name.to_string(),
            key,
            color_slot,
            source: resolved.source,
            events: resolved.events,
        });
        Ok(&self.topics[self.topics.len() - 1])
    }

    /// Remove a topic by name. No-op when absent; returns whether a topic
    /// was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let key = topic_key(name);
        let before = self.topics.len();
        self.topics.retain(|t| t.key != key);
        let removed = self.topics.len() < before;
        if removed {
            debug!(topic = %key, "topic removed from timeline");
        }
        removed
    }

    /// Topics in insertion order.
    pub fn list(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by (case-insensitive) name.
    pub fn get(&self, name: &str) -> Option<&Topic> {
        let key = topic_key(name);
        self.topics.iter().find(|t| t.key == key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
