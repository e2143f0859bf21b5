//! Static sample adapter: the last-resort tier.
//!
//! A fixed mapping for a handful of well-known topics so a demo never
//! dead-ends. Exact normalized-key lookup only; always available, `Empty`
//! for everything else.

use async_trait::async_trait;
use strata_core::normalize::topic_key;
use strata_core::{IEventProvider, RawEvent, ResolveOutcome};

type Sample = (&'static str, &'static [(i64, &'static str, &'static str)]);

static SAMPLES: &[Sample] = &[
    (
        "renaissance",
        &[
            (1440, "Gutenberg Printing Press", "Movable type arrives in Europe"),
            (1495, "The Last Supper", "Leonardo begins his Milan mural"),
            (1504, "David Unveiled", "Michelangelo's statue displayed in Florence"),
            (1512, "Sistine Chapel Ceiling", "Michelangelo completes the frescoes"),
            (1543, "Heliocentric Model Published", "Copernicus places the Sun at the center"),
        ],
    ),
    (
        "industrial revolution",
        &[
            (1712, "Newcomen Steam Engine", "First practical steam engine pumps water"),
            (1764, "Spinning Jenny", "Hargreaves multiplies thread production"),
            (1769, "Watt Steam Engine", "Separate condenser transforms efficiency"),
            (1825, "First Public Railway", "Stockton and Darlington line opens"),
            (1851, "Great Exhibition", "Crystal Palace showcases machine age"),
        ],
    ),
    (
        "ancient egypt",
        &[
            (-2630, "Step Pyramid of Djoser", "First monumental stone building"),
            (-2560, "Great Pyramid of Giza", "Khufu's tomb completed at Giza"),
            (-1332, "Tutankhamun Crowned", "Boy king takes the throne"),
            (-1279, "Ramesses II Crowned", "Egypt's longest-reigning pharaoh"),
            (-30, "Rome Annexes Egypt", "Death of Cleopatra ends Ptolemaic rule"),
        ],
    ),
];

/// Last-resort static sample provider.
pub struct SampleProvider;

impl SampleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SampleProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IEventProvider for SampleProvider {
    async fn resolve(&self, topic: &str) -> ResolveOutcome {
        let key = topic_key(topic);
        match SAMPLES.iter().find(|(k, _)| *k == key) {
            Some((_, entries)) => ResolveOutcome::Found(
                entries
                    .iter()
                    .map(|(year, title, description)| {
                        RawEvent::from_year(*year, *title, *description)
                    })
                    .collect(),
            ),
            None => ResolveOutcome::Empty,
        }
    }

    fn name(&self) -> &str {
        "static-sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_key_is_never_empty() {
        let outcome = SampleProvider::new().resolve("Renaissance").await;
        assert!(outcome.has_candidates());
    }

    #[tokio::test]
    async fn unknown_key_is_empty() {
        let outcome = SampleProvider::new().resolve("xyzzyplex history").await;
        assert!(matches!(outcome, ResolveOutcome::Empty));
    }

    #[tokio::test]
    async fn no_containment_matching_at_this_tier() {
        // Unlike the curated tier, samples only answer exact keys.
        let outcome = SampleProvider::new().resolve("egypt").await;
        assert!(matches!(outcome, ResolveOutcome::Empty));
    }
}
