//! The unified timeline layout: every distinct event year across all
//! active topics mapped to one horizontal position.
//!
//! Spacing is by rank, not by numeric year distance — adjacent markers are
//! always equally far apart whether the years are one apart or a
//! millennium. Dense eras stay readable; the year ruler carries the
//! numeric truth.
//!
//! Recomputed in full after every registry mutation. At ≤5 topics with
//! ≤20 events each, correctness beats incremental patching.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strata_core::Event;

use crate::registry::Topic;

/// Derived year-to-position mapping spanning all active topics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    distinct_years: Vec<i32>,
    positions: BTreeMap<i32, f64>,
}

impl TimelineLayout {
    /// Every year appearing in any active topic's events, ascending.
    pub fn distinct_years(&self) -> &[i32] {
        &self.distinct_years
    }

    /// Horizontal position of a year, when it is on the timeline.
    pub fn position(&self, year: i32) -> Option<f64> {
        self.positions.get(&year).copied()
    }

    /// The full year-to-position mapping, ascending by year.
    pub fn positions(&self) -> &BTreeMap<i32, f64> {
        &self.positions
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.distinct_years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_years.is_empty()
    }
}

/// Compute the unified layout for the given topics over a fixed width.
///
/// With N ≥ 2 distinct years, year at rank i sits at `i * (width / (N-1))`,
/// so the first year is at 0 and the last at `width`. A single year maps
/// to 0; no years yields an empty mapping.
pub fn layout(topics: &[Topic], width: f64) -> TimelineLayout {
    let years: BTreeSet<i32> = topics
        .iter()
        .flat_map(|topic| topic.events().iter().map(Event::year))
        .collect();
    let distinct_years: Vec<i32> = years.into_iter().collect();

    let positions: BTreeMap<i32, f64> = match distinct_years.len() {
        0 => BTreeMap::new(),
        1 => BTreeMap::from([(distinct_years[0], 0.0)]),
        n => {
            let step = width / (n - 1) as f64;
            distinct_years
                .iter()
                .enumerate()
                .map(|(rank, &year)| (year, rank as f64 * step))
                .collect()
        }
    };

    TimelineLayout {
        distinct_years,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use strata_core::config::ResolveConfig;
    use strata_core::normalize::normalize;
    use strata_core::RawEvent;

    use super::*;

    const WIDTH: f64 = 400.0;
    const EPSILON: f64 = 1e-9;

    fn event(year: i32) -> Event {
        let raw = RawEvent::from_year(i64::from(year), format!("Marker {year}"), "test event");
        normalize(&raw, "test topic", "test", &ResolveConfig::default())
            .expect("test year within default range")
    }

    fn topic(name: &str, years: &[i32]) -> Topic {
        Topic::for_tests(name, 0, years.iter().copied().map(event).collect())
    }

    #[test]
    fn no_topics_yields_empty_layout() {
        let result = layout(&[], WIDTH);
        assert!(result.is_empty());
        assert!(result.positions().is_empty());
    }

    #[test]
    fn single_year_sits_at_origin() {
        let topics = vec![topic("solo", &[1969])];
        let result = layout(&topics, WIDTH);
        assert_eq!(result.distinct_years(), &[1969]);
        assert_eq!(result.position(1969), Some(0.0));
    }

    #[test]
    fn years_from_all_topics_are_unioned_and_spaced_evenly() {
        let topics = vec![
            topic("wars", &[1914, 1945]),
            topic("space", &[1957, 1969]),
        ];
        let result = layout(&topics, WIDTH);
        assert_eq!(result.distinct_years(), &[1914, 1945, 1957, 1969]);

        let step = WIDTH / 3.0;
        assert!((result.position(1914).unwrap() - 0.0).abs() < EPSILON);
        assert!((result.position(1945).unwrap() - step).abs() < EPSILON);
        assert!((result.position(1957).unwrap() - 2.0 * step).abs() < EPSILON);
        assert!((result.position(1969).unwrap() - WIDTH).abs() < EPSILON);
    }

    #[test]
    fn shared_years_appear_once() {
        let topics = vec![
            topic("wars", &[1945, 1914]),
            topic("cold war", &[1945, 1991]),
        ];
        let result = layout(&topics, WIDTH);
        assert_eq!(result.distinct_years(), &[1914, 1945, 1991]);
    }

    #[test]
    fn spacing_ignores_numeric_gaps() {
        // 3000-year gap and a 1-year gap get the same step.
        let topics = vec![topic("mixed", &[-753, 1914, 1915])];
        let result = layout(&topics, WIDTH);
        let step = WIDTH / 2.0;
        assert!((result.position(1914).unwrap() - step).abs() < EPSILON);
        assert!((result.position(1915).unwrap() - WIDTH).abs() < EPSILON);
    }

    #[test]
    fn missing_year_has_no_position() {
        let topics = vec![topic("wars", &[1914])];
        assert_eq!(layout(&topics, WIDTH).position(1915), None);
    }

    proptest! {
        #[test]
        fn positions_are_rank_monotonic_and_evenly_spaced(
            years in proptest::collection::btree_set(-3000i32..=2020, 2..40)
        ) {
            let years: Vec<i32> = years.into_iter().collect();
            let topics = vec![topic("arbitrary", &years)];
            let result = layout(&topics, WIDTH);

            prop_assert_eq!(result.distinct_years(), years.as_slice());

            let positions: Vec<f64> = result
                .distinct_years()
                .iter()
                .map(|&y| result.position(y).unwrap())
                .collect();

            prop_assert!((positions[0] - 0.0).abs() < EPSILON);
            prop_assert!((positions[positions.len() - 1] - WIDTH).abs() < EPSILON);

            let step = WIDTH / (positions.len() - 1) as f64;
            for window in positions.windows(2) {
                prop_assert!(window[0] < window[1]);
                prop_assert!(((window[1] - window[0]) - step).abs() < 1e-6);
            }
        }
    }
}
