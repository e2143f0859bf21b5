//! Curated dataset adapter: a small, hand-authored, in-process mapping from
//! canonical topic keys to event lists.
//!
//! Highest-precision tier. Deterministic, no network, never unavailable.
//! Lookup is exact key first, then substring containment in either
//! direction with every matching key's events concatenated.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use strata_core::normalize::topic_key;
use strata_core::{IEventProvider, RawEvent, ResolveOutcome};
use tracing::debug;

type Dataset = (&'static str, &'static [(i64, &'static str, &'static str)]);

static DATASETS: &[Dataset] = &[
    (
        "world wars",
        &[
            (1914, "World War I Begins", "Archduke Franz Ferdinand assassinated in Sarajevo"),
            (1916, "Battle of Verdun", "Longest single battle of WWI"),
            (1917, "Russian Revolution", "Bolsheviks overthrow Tsarist regime"),
            (1917, "US Enters WWI", "America declares war on Germany"),
            (1918, "WWI Armistice", "Fighting ends on November 11th"),
            (1939, "WWII Begins", "Germany invades Poland"),
            (1940, "Battle of Britain", "RAF defeats German Luftwaffe"),
            (1941, "Pearl Harbor Attack", "Japan attacks US naval base"),
            (1942, "Battle of Stalingrad", "Turning point on Eastern Front"),
            (1944, "D-Day Normandy", "Allied invasion of Nazi-occupied France"),
            (1945, "Hiroshima & Nagasaki", "Atomic bombs dropped on Japan"),
            (1945, "WWII Ends", "Japan surrenders, war officially over"),
        ],
    ),
    (
        "space exploration",
        &[
            (1957, "Sputnik 1 Launch", "First artificial satellite orbits Earth"),
            (1957, "Laika in Space", "First living creature to orbit Earth"),
            (1961, "Yuri Gagarin", "First human to journey into space"),
            (1961, "Alan Shepard", "First American in space"),
            (1965, "First Spacewalk", "Alexei Leonov exits spacecraft"),
            (1969, "Apollo 11 Moon Landing", "Neil Armstrong first human on Moon"),
            (1971, "First Space Station", "Salyut 1 launched by Soviet Union"),
            (1975, "Apollo-Soyuz Mission", "First joint US-Soviet space mission"),
            (1981, "Space Shuttle Era", "Columbia first reusable spacecraft"),
            (1998, "ISS Construction Begins", "International Space Station assembly"),
            (2012, "SpaceX Dragon", "First commercial spacecraft to ISS"),
            (2020, "Crew Dragon Demo", "First crewed commercial spaceflight"),
        ],
    ),
    (
        "american civil war",
        &[
            (1860, "Lincoln Elected", "Abraham Lincoln wins presidency"),
            (1860, "South Carolina Secedes", "First state to leave the Union"),
            (1861, "Fort Sumter", "First shots of Civil War fired"),
            (1861, "First Battle of Bull Run", "First major battle of the war"),
            (1862, "Battle of Antietam", "Bloodiest single day in American history"),
            (1863, "Emancipation Proclamation", "Lincoln frees slaves in rebel states"),
            (1863, "Battle of Gettysburg", "Turning point of the war"),
            (1863, "Gettysburg Address", "Lincoln's famous speech"),
            (1864, "Sherman's March", "March to the Sea through Georgia"),
            (1865, "Lee Surrenders", "Confederate surrender at Appomattox"),
            (1865, "Lincoln Assassinated", "President shot by John Wilkes Booth"),
        ],
    ),
    (
        "ancient rome",
        &[
            (-753, "Founding of Rome", "Legendary founding by Romulus"),
            (-509, "Roman Republic", "End of monarchy, republic established"),
            (-264, "First Punic War", "Rome vs Carthage begins"),
            (-218, "Hannibal Crosses Alps", "Second Punic War escalates"),
            (-49, "Caesar Crosses Rubicon", "Civil war begins"),
            (-44, "Caesar Assassinated", "Ides of March conspiracy"),
            (-27, "Roman Empire Begins", "Augustus becomes first emperor"),
            (64, "Great Fire of Rome", "City burns under Nero"),
            (79, "Vesuvius Erupts", "Pompeii and Herculaneum destroyed"),
            (313, "Edict of Milan", "Christianity legalized"),
            (410, "Visigoth Sack Rome", "Alaric I captures the city"),
            (476, "Fall of Western Rome", "Last emperor deposed"),
        ],
    ),
    (
        "french revolution",
        &[
            (1789, "Estates-General Called", "First meeting since 1614"),
            (1789, "Tennis Court Oath", "Third Estate forms National Assembly"),
            (1789, "Storming of Bastille", "Revolution begins July 14th"),
            (1789, "Declaration of Rights", "Rights of Man and Citizen adopted"),
            (1792, "Monarchy Abolished", "First French Republic declared"),
            (1793, "Louis XVI Executed", "King guillotined January 21st"),
            (1793, "Reign of Terror Begins", "Mass executions under Robespierre"),
            (1794, "Robespierre Executed", "Terror ends with his death"),
            (1799, "Napoleon's Coup", "Bonaparte seizes power"),
            (1804, "Napoleon Crowned Emperor", "Self-coronation at Notre Dame"),
        ],
    ),
    (
        "cold war",
        &[
            (1945, "Yalta Conference", "Big Three divide post-war Europe"),
            (1947, "Truman Doctrine", "US commits to containing communism"),
            (1947, "Marshall Plan", "American aid rebuilds Western Europe"),
            (1948, "Berlin Blockade", "Soviets cut off West Berlin"),
            (1949, "NATO Formed", "Western military alliance created"),
            (1949, "Soviet Nuclear Test", "USSR develops atomic bomb"),
            (1950, "Korean War Begins", "First hot war of Cold War era"),
            (1955, "Warsaw Pact", "Eastern bloc military alliance"),
            (1962, "Cuban Missile Crisis", "World on brink of nuclear war"),
            (1975, "Vietnam War Ends", "Saigon falls to North Vietnam"),
            (1989, "Berlin Wall Falls", "Symbol of division comes down"),
            (1991, "Soviet Union Dissolves", "Cold War officially ends"),
        ],
    ),
];

/// The datasets materialized as raw candidates, in authoring order.
static CANDIDATES: Lazy<Vec<(&'static str, Vec<RawEvent>)>> = Lazy::new(|| {
    DATASETS
        .iter()
        .map(|(key, entries)| {
            let events = entries
                .iter()
                .map(|(year, title, description)| RawEvent::from_year(*year, *title, *description))
                .collect();
            (*key, events)
        })
        .collect()
});

/// In-process curated dataset provider.
pub struct CuratedProvider;

impl CuratedProvider {
    pub fn new() -> Self {
        Self
    }

    fn lookup(key: &str) -> Vec<RawEvent> {
        // Exact key match first.
        if let Some((_, events)) = CANDIDATES.iter().find(|(k, _)| *k == key) {
            return events.clone();
        }

        // Containment in either direction; all matches concatenated.
        let mut matches = Vec::new();
        for (k, events) in CANDIDATES.iter() {
            if k.contains(key) || key.contains(k) {
                matches.extend(events.iter().cloned());
            }
        }
        matches
    }
}

impl Default for CuratedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IEventProvider for CuratedProvider {
    async fn resolve(&self, topic: &str) -> ResolveOutcome {
        let key = topic_key(topic);
        if key.is_empty() {
            return ResolveOutcome::Empty;
        }

        let events = Self::lookup(&key);
        debug!(topic, candidates = events.len(), "curated dataset lookup");
        if events.is_empty() {
            ResolveOutcome::Empty
        } else {
            ResolveOutcome::Found(events)
        }
    }

    fn name(&self) -> &str {
        "curated-dataset"
    }
}
