//! Event records: raw provider candidates and canonical timeline events.

use serde::{Deserialize, Serialize};

/// A candidate record as produced by a provider, before validation.
///
/// Providers never construct [`Event`] directly; they emit these and the
/// normalizer decides what survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Explicit numeric year when the source carries one. Wins over `date`.
    pub year: Option<i64>,
    /// Date literal to parse a year from: ISO-like (`1914-06-28`), signed
    /// astronomical (`-0753-04-21T00:00:00Z`), bare (`1969`), or era-suffixed
    /// (`753 BC`).
    pub date: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl RawEvent {
    /// Candidate with an explicit year and description.
    pub fn from_year(
        year: i64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            year: Some(year),
            date: None,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Candidate with a date literal still to be parsed.
    pub fn from_date(
        date: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            year: None,
            date: Some(date.into()),
            title: title.into(),
            description,
        }
    }
}

/// One historical occurrence on the timeline.
///
/// Immutable once constructed: fields are private and the only constructor
/// is crate-visible, so the normalizer is the single producer of canonical
/// events.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    year: i32,
    title: String,
    description: String,
    source: String,
}

impl Event {
    pub(crate) fn new(year: i32, title: String, description: String, source: String) -> Self {
        Self {
            year,
            title,
            description,
            source,
        }
    }

    /// Event year; negative values are BCE.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Cleaned title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Capped description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Label of the provider that produced this event. Provenance only.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Equality excludes provenance: the same occurrence reported by two
/// providers is one event.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.title == other.title
            && self.description == other.description
    }
}

impl Eq for Event {}
