//! Knowledge-graph query adapter.
//!
//! Issues structured SPARQL queries against a Wikidata-compatible endpoint,
//! filtered to historical-event entity classes and the configured year
//! range. Three query variants run concurrently — direct label
//! containment, category-restricted, subject-tag — and their bindings are
//! merged before the shared dedup pass. Any transport or parse failure
//! collapses to `Unavailable`.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use strata_core::config::ResolveConfig;
use strata_core::constants::MAX_CANDIDATES_PER_TOPIC;
use strata_core::errors::ProviderError;
use strata_core::{IEventProvider, RawEvent, ResolveOutcome};
use tracing::{debug, warn};

use crate::http;

const PROVIDER: &str = "knowledge-graph";

/// Transport seam for SPARQL SELECT requests.
#[async_trait]
pub trait ISparqlClient: Send + Sync {
    /// Run a SELECT query, returning the endpoint's JSON result document.
    async fn select(&self, query: &str) -> Result<Value, ProviderError>;
}

/// reqwest-backed SPARQL client.
pub struct SparqlHttpClient {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl SparqlHttpClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://query.wikidata.org/sparql";

    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = http::build_client(timeout_secs).map_err(|e| ProviderError::Unavailable {
            provider: PROVIDER.to_string(),
            reason: format!("http client construction failed: {e}"),
        })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout_secs,
        })
    }
}

#[async_trait]
impl ISparqlClient for SparqlHttpClient {
    async fn select(&self, query: &str) -> Result<Value, ProviderError> {
        http::with_timeout(PROVIDER, self.timeout_secs, async {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[("query", query), ("format", "json")])
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| ProviderError::Unavailable {
                    provider: PROVIDER.to_string(),
                    reason: e.to_string(),
                })?;

            if !response.status().is_success() {
                return Err(ProviderError::Unavailable {
                    provider: PROVIDER.to_string(),
                    reason: format!("endpoint returned {}", response.status()),
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ProviderError::MalformedResponse {
                    provider: PROVIDER.to_string(),
                    reason: e.to_string(),
                })
        })
        .await
    }
}

/// Knowledge-graph event provider.
pub struct KnowledgeGraphProvider {
    client: Box<dyn ISparqlClient>,
    config: ResolveConfig,
}

impl KnowledgeGraphProvider {
    pub fn new(client: Box<dyn ISparqlClient>, config: ResolveConfig) -> Self {
        Self { client, config }
    }

    /// Strip characters that would escape a SPARQL string literal.
    fn sanitize_term(topic: &str) -> String {
        topic
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '\'')
            .collect()
    }

    /// Direct label containment over historical-event instances.
    fn direct_query(&self, term: &str) -> String {
        format!(
            r#"SELECT DISTINCT ?event ?eventLabel ?date ?description WHERE {{
  ?event rdfs:label ?eventLabel .
  ?event wdt:P31/wdt:P279* wd:Q1190554 .
  ?event wdt:P585 ?date .
  FILTER(CONTAINS(LCASE(?eventLabel), "{term}"))
  OPTIONAL {{ ?event schema:description ?description . FILTER(LANG(?description) = "en") }}
  FILTER(LANG(?eventLabel) = "en")
  FILTER(YEAR(?date) >= {min} && YEAR(?date) <= {max})
}}
ORDER BY ?date
LIMIT {limit}"#,
            term = term,
            min = self.config.year_min,
            max = self.config.year_max,
            limit = self.config.query_limit,
        )
    }

    /// Broader occurrence class, restricted by the entity's main category.
    fn category_query(&self, term: &str) -> String {
        format!(
            r#"SELECT DISTINCT ?event ?eventLabel ?date ?description WHERE {{
  ?event rdfs:label ?eventLabel .
  ?event wdt:P31/wdt:P279* wd:Q1656682 .
  ?event wdt:P585 ?date .
  ?event wdt:P910 ?category .
  ?category rdfs:label ?categoryLabel .
  FILTER(CONTAINS(LCASE(?categoryLabel), "{term}"))
  OPTIONAL {{ ?event schema:description ?description . FILTER(LANG(?description) = "en") }}
  FILTER(LANG(?eventLabel) = "en")
  FILTER(LANG(?categoryLabel) = "en")
  FILTER(YEAR(?date) >= {min} && YEAR(?date) <= {max})
}}
ORDER BY ?date
LIMIT {limit}"#,
            term = term,
            min = self.config.year_min,
            max = self.config.year_max,
            limit = self.config.query_limit,
        )
    }

    /// Entities whose main-subject tag matches the topic.
    fn subject_query(&self, term: &str) -> String {
        format!(
            r#"SELECT DISTINCT ?event ?eventLabel ?date ?description WHERE {{
  ?event rdfs:label ?eventLabel .
  ?event wdt:P585 ?date .
  ?event wdt:P921 ?subject .
  ?subject rdfs:label ?subjectLabel .
  FILTER(CONTAINS(LCASE(?subjectLabel), "{term}"))
  OPTIONAL {{ ?event schema:description ?description . FILTER(LANG(?description) = "en") }}
  FILTER(LANG(?eventLabel) = "en")
  FILTER(LANG(?subjectLabel) = "en")
  FILTER(YEAR(?date) >= {min} && YEAR(?date) <= {max})
}}
ORDER BY ?date
LIMIT {limit}"#,
            term = term,
            min = self.config.year_min,
            max = self.config.year_max,
            limit = self.config.query_limit,
        )
    }

    /// Extract raw candidates from a SPARQL JSON result document.
    fn parse_bindings(document: &Value) -> Vec<RawEvent> {
        let Some(bindings) = document
            .pointer("/results/bindings")
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        bindings
            .iter()
            .filter_map(|binding| {
                let label = binding.pointer("/eventLabel/value")?.as_str()?;
                let date = binding.pointer("/date/value")?.as_str()?;
                let description = binding
                    .pointer("/description/value")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(RawEvent::from_date(date, label, description))
            })
            .collect()
    }
}

#[async_trait]
impl IEventProvider for KnowledgeGraphProvider {
    async fn resolve(&self, topic: &str) -> ResolveOutcome {
        let term = Self::sanitize_term(topic);
        if term.is_empty() {
            return ResolveOutcome::Empty;
        }

        // Read-only and independent: the three variants run concurrently
        // and merge only after all have settled.
        let direct_query = self.direct_query(&term);
        let category_query = self.category_query(&term);
        let subject_query = self.subject_query(&term);
        let (direct, category, subject) = tokio::join!(
            self.client.select(&direct_query),
            self.client.select(&category_query),
            self.client.select(&subject_query),
        );

        let mut candidates = Vec::new();
        let mut failures = 0;
        let mut last_reason = String::new();
        for result in [direct, category, subject] {
            match result {
                Ok(document) => candidates.extend(Self::parse_bindings(&document)),
                Err(err) => {
                    warn!(error = %err, "knowledge-graph query variant failed");
                    failures += 1;
                    last_reason = err.to_string();
                }
            }
        }

        if candidates.is_empty() {
            if failures == 3 {
                return ResolveOutcome::Unavailable {
                    reason: last_reason,
                };
            }
            return ResolveOutcome::Empty;
        }

        candidates.truncate(MAX_CANDIDATES_PER_TOPIC);
        debug!(topic, candidates = candidates.len(), "knowledge-graph merge complete");
        ResolveOutcome::Found(candidates)
    }

    fn name(&self) -> &str {
        PROVIDER
    }
}
