//! # strata-timeline
//!
//! The shared timeline: a bounded, insertion-ordered registry of resolved
//! topics and the layout engine that places every event year on one
//! rank-spaced horizontal axis.
//!
//! Both query surfaces — [`TopicRegistry::list`] and [`layout`] — are pure
//! reads; any rendering technology can poll them after each mutation.

pub mod layout;
pub mod registry;

pub use layout::{layout, TimelineLayout};
pub use registry::{Topic, TopicRegistry};
