//! Generative fallback adapter.
//!
//! When a completion backend is configured, requests a small structured
//! event list under an explicit JSON schema contract and validates every
//! entry against the same year-range and non-empty-field rules the
//! normalizer applies. Accepted lists are cached per normalized topic:
//! this is the most expensive tier and re-adding a removed topic is a
//! common flow.
//!
//! Without a backend (or when the response fails to parse, or contains
//! zero valid entries) a deterministic template generator keyed by keyword
//! heuristics takes over; topics matching no keyword leave the tier
//! `Unavailable`.

use async_trait::async_trait;
use moka::sync::Cache;
use serde::Deserialize;
use serde_json::Value;
use strata_core::config::{GenerativeConfig, ResolveConfig};
use strata_core::errors::ProviderError;
use strata_core::normalize::topic_key;
use strata_core::{IEventProvider, RawEvent, ResolveOutcome};
use tracing::{debug, info, warn};

use crate::http;

const PROVIDER: &str = "generative";

/// Keyword heuristics for the template generator: first match selects the
/// event-shape template and its base year.
const TEMPLATE_KEYWORDS: &[(&str, i64)] = &[
    ("revolution", 1789),
    ("war", 1914),
    ("empire", -27),
    ("dynasty", 618),
    ("kingdom", 802),
    ("republic", -509),
    ("ancient", -500),
];

/// Completion transport seam.
#[async_trait]
pub trait ICompletionBackend: Send + Sync {
    /// Run one completion request, returning the raw response text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// reqwest-backed chat-completions client.
pub struct ChatCompletionBackend {
    client: reqwest::Client,
    config: GenerativeConfig,
    timeout_secs: u64,
}

impl ChatCompletionBackend {
    pub fn new(config: GenerativeConfig, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = http::build_client(timeout_secs).map_err(|e| ProviderError::Unavailable {
            provider: PROVIDER.to_string(),
            reason: format!("http client construction failed: {e}"),
        })?;
        Ok(Self {
            client,
            config,
            timeout_secs,
        })
    }
}

#[async_trait]
impl ICompletionBackend for ChatCompletionBackend {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Unavailable {
                provider: PROVIDER.to_string(),
                reason: "no backend credential configured".to_string(),
            })?;

        http::with_timeout(PROVIDER, self.timeout_secs, async {
            let body = serde_json::json!({
                "model": self.config.model,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": 0.2,
            });

            let response = self
                .client
                .post(&self.config.api_url)
                .bearer_auth(key)
                .json(&body)
                .send()
                .await
                .map_err(|e| ProviderError::Unavailable {
                    provider: PROVIDER.to_string(),
                    reason: e.to_string(),
                })?;

            if !response.status().is_success() {
                return Err(ProviderError::Unavailable {
                    provider: PROVIDER.to_string(),
                    reason: format!("backend returned {}", response.status()),
                });
            }

            let document: Value =
                response
                    .json()
                    .await
                    .map_err(|e| ProviderError::MalformedResponse {
                        provider: PROVIDER.to_string(),
                        reason: e.to_string(),
                    })?;

            document
                .pointer("/choices/0/message/content")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| ProviderError::MalformedResponse {
                    provider: PROVIDER.to_string(),
                    reason: "no completion content in response".to_string(),
                })
        })
        .await
    }
}

/// One entry of the backend's structured response.
#[derive(Debug, Deserialize)]
struct GeneratedEntry {
    year: i64,
    title: String,
    description: String,
}

/// Generative fallback event provider.
pub struct GenerativeProvider {
    backend: Option<Box<dyn ICompletionBackend>>,
    cache: Cache<String, Vec<RawEvent>>,
    resolve_config: ResolveConfig,
    max_entries: usize,
}

impl GenerativeProvider {
    pub fn new(
        backend: Option<Box<dyn ICompletionBackend>>,
        resolve_config: ResolveConfig,
        generative_config: &GenerativeConfig,
    ) -> Self {
        Self {
            backend,
            cache: Cache::new(generative_config.cache_capacity),
            resolve_config,
            max_entries: generative_config.max_entries,
        }
    }

    fn prompt(&self, topic: &str) -> String {
        format!(
            "List the {count} most significant historical events related to \"{topic}\". \
             Respond with only a JSON array, no prose. Each entry must be an object \
             {{\"year\": <signed integer, negative for BCE>, \"title\": \"<short title>\", \
             \"description\": \"<one sentence>\"}}. Order entries chronologically by year \
             and use historically accurate years.",
            count = self.max_entries,
        )
    }

    /// Parse the backend response and keep only entries that would survive
    /// normalization: in-range year, non-empty title and description.
    fn parse_entries(&self, text: &str) -> Vec<RawEvent> {
        // Tolerate prose or code fences around the array.
        let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) else {
            return Vec::new();
        };
        if end < start {
            return Vec::new();
        }

        let entries: Vec<GeneratedEntry> = match serde_json::from_str(&text[start..=end]) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "backend response is not the expected array");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter(|entry| {
                entry.year >= i64::from(self.resolve_config.year_min)
                    && entry.year <= i64::from(self.resolve_config.year_max)
                    && !entry.title.trim().is_empty()
                    && !entry.description.trim().is_empty()
            })
            .map(|entry| RawEvent::from_year(entry.year, entry.title, entry.description))
            .collect()
    }

    /// Deterministic template events for topics matching a keyword
    /// heuristic; empty when no keyword matches.
    fn template_events(topic: &str) -> Vec<RawEvent> {
        let key = topic_key(topic);
        let Some((keyword, base_year)) = TEMPLATE_KEYWORDS
            .iter()
            .find(|(keyword, _)| key.contains(keyword))
        else {
            return Vec::new();
        };

        debug!(topic, keyword, base_year, "using template generator");
        let phases: &[(i64, &str, &str)] = &[
            (0, "{} begins", "Opening phase, reconstructed from the era of {}"),
            (2, "{} escalates", "The conflict around {} widens"),
            (5, "Turning point of {}", "Decisive shift in the course of {}"),
            (9, "{} concludes", "Closing phase and aftermath of {}"),
        ];

        phases
            .iter()
            .map(|(offset, title_fmt, desc_fmt)| {
                RawEvent::from_year(
                    base_year + offset,
                    title_fmt.replace("{}", key.as_str()),
                    desc_fmt.replace("{}", key.as_str()),
                )
            })
            .collect()
    }
}

#[async_trait]
impl IEventProvider for GenerativeProvider {
    async fn resolve(&self, topic: &str) -> ResolveOutcome {
        let key = topic_key(topic);

        if let Some(cached) = self.cache.get(&key) {
            debug!(topic, "generative cache hit");
            return ResolveOutcome::Found(cached);
        }

        if let Some(backend) = &self.backend {
            match backend.complete(&self.prompt(topic)).await {
                Ok(text) => {
                    let events = self.parse_entries(&text);
                    if events.is_empty() {
                        warn!(topic, "backend returned zero valid entries");
                    } else {
                        info!(topic, events = events.len(), "backend produced events");
                        self.cache.insert(key, events.clone());
                        return ResolveOutcome::Found(events);
                    }
                }
                Err(err) => {
                    warn!(topic, error = %err, "completion backend failed");
                }
            }
        }

        let template = Self::template_events(topic);
        if template.is_empty() {
            ResolveOutcome::Unavailable {
                reason: "no backend result and no template keyword matched".to_string(),
            }
        } else {
            ResolveOutcome::Found(template)
        }
    }

    fn name(&self) -> &str {
        PROVIDER
    }

    fn is_available(&self) -> bool {
        // The template tier keeps this adapter worth consulting even
        // without a backend.
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct CannedBackend {
        response: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ICompletionBackend for CannedBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn provider_with_backend(response: &str) -> (GenerativeProvider, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = CannedBackend {
            response: response.to_string(),
            calls: Arc::clone(&calls),
        };
        let provider = GenerativeProvider::new(
            Some(Box::new(backend)),
            ResolveConfig::default(),
            &GenerativeConfig::default(),
        );
        (provider, calls)
    }

    fn bare_provider() -> GenerativeProvider {
        GenerativeProvider::new(
            None,
            ResolveConfig::default(),
            &GenerativeConfig::default(),
        )
    }

    const VALID_RESPONSE: &str = r#"[
        {"year": 1861, "title": "Unification of Italy", "description": "Kingdom proclaimed"},
        {"year": 1871, "title": "Rome Becomes Capital", "description": "Papal States fall"}
    ]"#;

    #[tokio::test]
    async fn valid_backend_response_is_accepted() {
        let (provider, _) = provider_with_backend(VALID_RESPONSE);
        let outcome = provider.resolve("italian unification").await;
        let ResolveOutcome::Found(events) = outcome else {
            panic!("expected Found");
        };
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].year, Some(1861));
    }

    #[tokio::test]
    async fn prose_around_the_array_is_tolerated() {
        let wrapped = format!("Here are the events:\n```json\n{VALID_RESPONSE}\n```\nDone.");
        let (provider, _) = provider_with_backend(&wrapped);
        let outcome = provider.resolve("italian unification").await;
        assert!(outcome.has_candidates());
    }

    #[tokio::test]
    async fn invalid_entries_are_dropped() {
        let response = r#"[
            {"year": 1861, "title": "Valid Entry Here", "description": "kept"},
            {"year": 99999, "title": "Out of Range", "description": "dropped"},
            {"year": 1870, "title": "", "description": "blank title, dropped"},
            {"year": 1880, "title": "Blank Description", "description": "  "}
        ]"#;
        let (provider, _) = provider_with_backend(response);
        let outcome = provider.resolve("unification war").await;
        let ResolveOutcome::Found(events) = outcome else {
            panic!("expected Found");
        };
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Valid Entry Here");
    }

    #[tokio::test]
    async fn unparseable_response_falls_back_to_template() {
        let (provider, _) = provider_with_backend("I cannot answer that.");
        // Topic carries the "war" keyword, so the template tier answers.
        let outcome = provider.resolve("the flower war").await;
        let ResolveOutcome::Found(events) = outcome else {
            panic!("expected Found");
        };
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].year, Some(1914));
    }

    #[tokio::test]
    async fn accepted_results_are_cached_per_topic() {
        let (provider, calls) = provider_with_backend(VALID_RESPONSE);
        provider.resolve("Italian Unification").await;
        // Same topic, different casing: served from cache.
        provider.resolve("  italian unification ").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        provider.resolve("another unification").await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn no_backend_no_keyword_is_unavailable() {
        let outcome = bare_provider().resolve("xyzzyplex history").await;
        assert!(matches!(outcome, ResolveOutcome::Unavailable { .. }));
    }

    #[tokio::test]
    async fn template_keywords_are_deterministic() {
        let first = bare_provider().resolve("the cola revolution").await;
        let second = bare_provider().resolve("the cola revolution").await;
        let (ResolveOutcome::Found(a), ResolveOutcome::Found(b)) = (first, second) else {
            panic!("expected Found from both");
        };
        assert_eq!(a, b);
        assert_eq!(a[0].year, Some(1789));
    }
}
