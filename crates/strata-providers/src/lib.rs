//! # strata-providers
//!
//! The five event sources behind the uniform [`IEventProvider`] contract,
//! plus the [`ResolutionChain`] that tries them in priority order:
//!
//! curated dataset → knowledge graph → encyclopedia mining → generative
//! fallback → static samples.
//!
//! Every network adapter goes through a client seam (`ISparqlClient`,
//! `IEncyclopediaClient`, `ICompletionBackend`) so transport failures
//! collapse to `ResolveOutcome::Unavailable` in exactly one place and
//! tests can drive the adapters with mocks.
//!
//! [`IEventProvider`]: strata_core::IEventProvider

pub mod chain;
pub mod curated;
pub mod encyclopedia;
pub mod generative;
pub mod http;
pub mod knowledge_graph;
pub mod sample;

pub use chain::{default_chain, ResolutionChain};
pub use curated::CuratedProvider;
pub use encyclopedia::{EncyclopediaProvider, IEncyclopediaClient, MediaWikiClient};
pub use generative::{ChatCompletionBackend, GenerativeProvider, ICompletionBackend};
pub use knowledge_graph::{ISparqlClient, KnowledgeGraphProvider, SparqlHttpClient};
pub use sample::SampleProvider;
