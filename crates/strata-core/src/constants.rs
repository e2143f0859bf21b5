/// Strata system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Leading filler words stripped from event titles (case-insensitive).
/// Multi-word entries are matched as a phrase.
pub const FILLER_WORDS: &[&str] = &[
    "The",
    "A",
    "An",
    "In",
    "During",
    "On",
    "At",
    "By",
    "After",
    "Before",
    "Following",
    "Prior to",
];

/// Number of color slots in the presentation palette. Topics are assigned
/// a slot by insertion order modulo this value.
pub const PALETTE_SIZE: usize = 6;

/// Hard cap on raw candidate events considered per topic, across all of a
/// provider's sub-queries.
pub const MAX_CANDIDATES_PER_TOPIC: usize = 60;
