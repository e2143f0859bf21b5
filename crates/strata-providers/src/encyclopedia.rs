//! Encyclopedia text-mining adapter.
//!
//! Finds candidate documents via a MediaWiki-style title search, then scans
//! their plain-text extracts for year-bearing sentences. Each qualifying
//! (sentence, year) pair becomes one raw candidate; the shared normalizer
//! and deduplicator do the rest.
//!
//! Noisier and slower than the structured tiers, so it sits below them in
//! the chain.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use strata_core::config::ResolveConfig;
use strata_core::constants::{FILLER_WORDS, MAX_CANDIDATES_PER_TOPIC};
use strata_core::errors::ProviderError;
use strata_core::{IEventProvider, RawEvent, ResolveOutcome};
use tracing::{debug, warn};

use crate::http;

const PROVIDER: &str = "encyclopedia";

/// Words taken from a sentence to form a derived title.
const TITLE_WORDS: usize = 8;

/// Three- or four-digit year, optionally era-suffixed (`753 BC`).
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{3,4})(?:\s*(BCE|BC))?\b").expect("static year pattern"));

/// Transport seam for the encyclopedia's search and content endpoints.
#[async_trait]
pub trait IEncyclopediaClient: Send + Sync {
    /// Titles of the most relevant documents for a query.
    async fn search_titles(&self, query: &str, limit: usize)
        -> Result<Vec<String>, ProviderError>;

    /// Plain-text extract of one document.
    async fn page_text(&self, title: &str) -> Result<String, ProviderError>;
}

/// reqwest-backed MediaWiki client.
pub struct MediaWikiClient {
    client: reqwest::Client,
    api_url: String,
    timeout_secs: u64,
}

impl MediaWikiClient {
    pub const DEFAULT_API_URL: &'static str = "https://en.wikipedia.org/w/api.php";

    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = http::build_client(timeout_secs).map_err(|e| ProviderError::Unavailable {
            provider: PROVIDER.to_string(),
            reason: format!("http client construction failed: {e}"),
        })?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            timeout_secs,
        })
    }

    async fn get_json(&self, params: &[(&str, &str)]) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(params)
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
    }
}

#[async_trait]
impl IEncyclopediaClient for MediaWikiClient {
    async fn search_titles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let limit = limit.to_string();
        let document = http::with_timeout(PROVIDER, self.timeout_secs, async {
            self.get_json(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
            ])
            .await
        })
        .await?;

        let titles = document
            .pointer("/query/search")
            .and_then(Value::as_array)
            .map(|results| {
                results
                    .iter()
                    .filter_map(|r| r.pointer("/title").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(titles)
    }

    async fn page_text(&self, title: &str) -> Result<String, ProviderError> {
        let document = http::with_timeout(PROVIDER, self.timeout_secs, async {
            self.get_json(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", title),
                ("prop", "extracts"),
                ("explaintext", "true"),
            ])
            .await
        })
        .await?;

        // Pages come back keyed by page id; take the first one.
        let extract = document
            .pointer("/query/pages")
            .and_then(Value::as_object)
            .and_then(|pages| pages.values().next())
            .and_then(|page| page.pointer("/extract"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(extract.to_string())
    }
}

/// Encyclopedia text-mining event provider.
pub struct EncyclopediaProvider {
    client: Box<dyn IEncyclopediaClient>,
    config: ResolveConfig,
}

impl EncyclopediaProvider {
    pub fn new(client: Box<dyn IEncyclopediaClient>, config: ResolveConfig) -> Self {
        Self { client, config }
    }

    /// First few words of the sentence, minus a leading filler word.
    fn derive_title(sentence: &str) -> String {
        let mut words: Vec<&str> = sentence.split_whitespace().collect();
        if let Some(first) = words.first() {
            let is_filler = FILLER_WORDS
                .iter()
                .any(|f| !f.contains(' ') && first.eq_ignore_ascii_case(f));
            if is_filler {
                words.remove(0);
            }
        }
        words
            .into_iter()
            .take(TITLE_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Scan document text for year-bearing sentences.
    fn mine_text(&self, text: &str) -> Vec<RawEvent> {
        let mut candidates = Vec::new();

        for sentence in text.split(['.', '!', '?']) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            for caps in YEAR_PATTERN.captures_iter(sentence) {
                let Ok(mut year) = caps[1].parse::<i64>() else {
                    continue;
                };
                if caps.get(2).is_some() {
                    year = -year;
                }
                if year < i64::from(self.config.year_min) || year > i64::from(self.config.year_max)
                {
                    continue;
                }

                candidates.push(RawEvent {
                    year: Some(year),
                    date: None,
                    title: Self::derive_title(sentence),
                    description: Some(sentence.to_string()),
                });
                if candidates.len() >= MAX_CANDIDATES_PER_TOPIC {
                    return candidates;
                }
            }
        }

        candidates
    }
}

#[async_trait]
impl IEventProvider for EncyclopediaProvider {
    async fn resolve(&self, topic: &str) -> ResolveOutcome {
        let query = format!("{topic} timeline history events");
        let titles = match self
            .client
            .search_titles(&query, self.config.search_doc_limit)
            .await
        {
            Ok(titles) => titles,
            Err(err) => return err.into(),
        };

        if titles.is_empty() {
            return ResolveOutcome::Empty;
        }

        let mut candidates = Vec::new();
        let mut fetch_failures = 0;
        for title in &titles {
            match self.client.page_text(title).await {
                Ok(text) => {
                    let mined = self.mine_text(&text);
                    debug!(document = %title, mined = mined.len(), "mined document");
                    candidates.extend(mined);
                }
                Err(err) => {
                    warn!(document = %title, error = %err, "document fetch failed");
                    fetch_failures += 1;
                }
            }
            if candidates.len() >= MAX_CANDIDATES_PER_TOPIC {
                break;
            }
        }

        if candidates.is_empty() {
            if fetch_failures == titles.len() {
                return ResolveOutcome::Unavailable {
                    reason: format!("all {fetch_failures} document fetches failed"),
                };
            }
            return ResolveOutcome::Empty;
        }

        candidates.truncate(MAX_CANDIDATES_PER_TOPIC);
        ResolveOutcome::Found(candidates)
    }

    fn name(&self) -> &str {
        PROVIDER
    }
}
