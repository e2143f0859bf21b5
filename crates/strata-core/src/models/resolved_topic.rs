use serde::Serialize;

use crate::event::Event;

/// Final result of resolving one topic: which tier answered and the
/// normalized, deduplicated, chronologically sorted events.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTopic {
    /// The topic as requested (trimmed).
    pub topic: String,
    /// Name of the provider tier that produced the events.
    pub source: String,
    pub events: Vec<Event>,
}
