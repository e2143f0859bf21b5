//! # strata-core
//!
//! Foundation crate for the Strata timeline system.
//! Defines the event model, provider contracts, errors, config, and the
//! shared normalization/deduplication passes.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dedupe;
pub mod errors;
pub mod event;
pub mod models;
pub mod normalize;
pub mod telemetry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StrataConfig;
pub use errors::{StrataError, StrataResult};
pub use event::{Event, RawEvent};
pub use models::{FallbackEvent, ResolvedTopic};
pub use traits::{IEventProvider, ITopicResolver, ResolveOutcome};
