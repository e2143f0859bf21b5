//! The normalizer: the only path from a provider's [`RawEvent`] candidate
//! to a canonical [`Event`].
//!
//! Invalid records are dropped silently (`None`), never raised: a rejected
//! candidate is not a provider failure.

use tracing::debug;

use crate::config::ResolveConfig;
use crate::constants::FILLER_WORDS;
use crate::event::{Event, RawEvent};

/// Normalized topic key: lower-cased, trimmed. Registry uniqueness and all
/// dataset lookups go through this.
pub fn topic_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate and clean a raw candidate into a canonical event.
///
/// Rejects when the year cannot be parsed, falls outside the configured
/// range, or the cleaned title is shorter than the minimum.
pub fn normalize(
    raw: &RawEvent,
    topic: &str,
    source: &str,
    cfg: &ResolveConfig,
) -> Option<Event> {
    let year = resolve_year(raw)?;
    if year < cfg.year_min || year > cfg.year_max {
        debug!(year, title = %raw.title, "rejected candidate: year out of range");
        return None;
    }

    let title = clean_title(&raw.title);
    if title.chars().count() < cfg.min_title_len {
        debug!(title = %raw.title, "rejected candidate: title too short after cleaning");
        return None;
    }

    let description = match raw.description.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => cap_description(d, cfg.max_description_len),
        _ => format!("Historical event related to {topic}"),
    };

    Some(Event::new(year, title, description, source.to_string()))
}

/// Year resolution order: explicit numeric field, then the date literal.
fn resolve_year(raw: &RawEvent) -> Option<i32> {
    if let Some(year) = raw.year {
        return i32::try_from(year).ok();
    }
    raw.date.as_deref().and_then(parse_year)
}

/// Parse a year out of a date literal.
///
/// Accepts ISO-like dates (`1914-06-28`), signed astronomical timestamps as
/// emitted by knowledge-graph endpoints (`-0753-04-21T00:00:00Z`), bare
/// years (`1969`), and era-suffixed forms (`753 BC`, `44 BCE`).
pub fn parse_year(date: &str) -> Option<i32> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    // Era suffix: digits followed by BC/BCE.
    let upper = date.to_ascii_uppercase();
    if let Some(stripped) = upper
        .strip_suffix("BCE")
        .or_else(|| upper.strip_suffix("BC"))
    {
        let digits = stripped.trim();
        let year: i32 = digits.parse().ok()?;
        return Some(-year);
    }

    // Optional astronomical sign, then the leading digit run.
    let (negative, rest) = match date.as_bytes()[0] {
        b'-' => (true, &date[1..]),
        b'+' => (false, &date[1..]),
        _ => (false, date),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let year: i32 = digits.parse().ok()?;
    Some(if negative { -year } else { year })
}

/// Clean a raw title: collapse whitespace, strip one leading filler word,
/// capitalize the first character.
fn clean_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = strip_leading_filler(&collapsed);
    capitalize_first(stripped)
}

/// Strip at most one leading filler word (case-insensitive); multi-word
/// entries match as a phrase.
fn strip_leading_filler(title: &str) -> &str {
    for filler in FILLER_WORDS {
        let len = filler.len();
        let Some(head) = title.get(..len) else {
            continue;
        };
        if head.eq_ignore_ascii_case(filler) && title.as_bytes().get(len) == Some(&b' ') {
            return &title[len + 1..];
        }
    }
    title
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Trim and cap a description, appending an ellipsis on truncation.
fn cap_description(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", truncated.trim_end())
}
