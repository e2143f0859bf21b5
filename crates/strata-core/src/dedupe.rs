//! Near-duplicate collapse for events gathered from independent queries.
//!
//! Key = `(year, lowercased title prefix)`. Titles describing the same
//! underlying fact are usually identical in their first few dozen
//! characters even when the full phrasing differs; anything fuzzier is
//! unnecessary at ≤60 candidates per topic.

use std::collections::HashSet;

use crate::event::Event;

/// Drop events whose `(year, title prefix)` key was already seen.
/// Order-preserving, first occurrence wins. Idempotent.
pub fn dedupe(events: Vec<Event>, prefix_len: usize) -> Vec<Event> {
    let mut seen: HashSet<(i32, String)> = HashSet::with_capacity(events.len());
    let mut unique = Vec::with_capacity(events.len());

    for event in events {
        let prefix: String = event
            .title()
            .to_lowercase()
            .chars()
            .take(prefix_len)
            .collect();
        if seen.insert((event.year(), prefix)) {
            unique.push(event);
        }
    }

    unique
}
