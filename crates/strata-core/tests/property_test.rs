//! Property-style coverage of the normalizer and deduplicator invariants.

use proptest::prelude::*;
use strata_core::config::ResolveConfig;
use strata_core::constants::FILLER_WORDS;
use strata_core::dedupe::dedupe;
use strata_core::normalize::normalize;
use strata_core::{Event, RawEvent};

fn cfg() -> ResolveConfig {
    ResolveConfig::default()
}

proptest! {
    #[test]
    fn normalized_year_is_always_in_range(year in -100_000i64..100_000) {
        let raw = RawEvent::from_year(year, "Generated Happening", "property input");
        match normalize(&raw, "props", "test", &cfg()) {
            Some(event) => {
                prop_assert!(event.year() >= cfg().year_min);
                prop_assert!(event.year() <= cfg().year_max);
            }
            None => {
                let out_of_range =
                    year < i64::from(cfg().year_min) || year > i64::from(cfg().year_max);
                prop_assert!(out_of_range, "in-range year {year} must normalize");
            }
        }
    }

    #[test]
    fn filler_prefixed_titles_lose_the_filler_and_are_capitalized(
        filler_idx in 0usize..12,
        body in "[a-z][a-z ]{10,30}[a-z]"
    ) {
        let filler = FILLER_WORDS[filler_idx];
        let raw = RawEvent::from_year(1900, format!("{filler} {body}"), "property input");
        let Some(event) = normalize(&raw, "props", "test", &cfg()) else {
            // Whitespace collapse can shrink the body below the length floor.
            return Ok(());
        };

        let title = event.title();
        let first_word = title.split_whitespace().next().unwrap_or_default();
        for stripped in FILLER_WORDS {
            prop_assert!(
                !first_word.eq_ignore_ascii_case(stripped)
                    || body.split_whitespace().next()
                        .is_some_and(|w| w.eq_ignore_ascii_case(stripped)),
                "title {title:?} still starts with a filler word"
            );
        }
        let first_char = title.chars().next().unwrap();
        prop_assert!(!first_char.is_lowercase());
    }

    #[test]
    fn descriptions_never_exceed_the_cap(description in ".{0,400}") {
        let raw = RawEvent {
            year: Some(1900),
            date: None,
            title: "Generated Happening".to_string(),
            description: Some(description),
        };
        if let Some(event) = normalize(&raw, "props", "test", &cfg()) {
            prop_assert!(event.description().chars().count() <= cfg().max_description_len);
            prop_assert!(!event.description().trim().is_empty());
        }
    }

    #[test]
    fn dedupe_is_idempotent_and_order_preserving(
        entries in proptest::collection::vec((1800i64..1810, 0usize..4), 0..30)
    ) {
        let titles = [
            "Treaty Signed at Dawn",
            "Uprising in the Capital",
            "Coronation Ceremony Held",
            "Fleet Sets Sail South",
        ];
        let events: Vec<Event> = entries
            .iter()
            .filter_map(|(year, title_idx)| {
                let raw = RawEvent::from_year(*year, titles[*title_idx], "property input");
                normalize(&raw, "props", "test", &cfg())
            })
            .collect();

        let once = dedupe(events.clone(), cfg().dedupe_prefix_len);
        let twice = dedupe(once.clone(), cfg().dedupe_prefix_len);
        prop_assert_eq!(&once, &twice);

        // Every survivor is the first occurrence of its key in the input.
        for survivor in &once {
            let first = events.iter().find(|e| {
                e.year() == survivor.year() && e.title() == survivor.title()
            });
            prop_assert_eq!(first.unwrap().source(), survivor.source());
        }

        // Survivors keep their relative input order.
        let mut cursor = 0;
        for survivor in &once {
            let found = events[cursor..]
                .iter()
                .position(|e| e == survivor)
                .map(|offset| cursor + offset);
            prop_assert!(found.is_some());
            cursor = found.unwrap();
        }
    }
}
