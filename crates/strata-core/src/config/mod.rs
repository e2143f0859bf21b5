//! Configuration for every Strata subsystem.
//!
//! All configs are serde-friendly with `#[serde(default)]` so partial
//! overrides deserialize cleanly. Defaults live in [`defaults`].

pub mod defaults;

mod generative_config;
mod layout_config;
mod registry_config;
mod resolve_config;

pub use generative_config::GenerativeConfig;
pub use layout_config::LayoutConfig;
pub use registry_config::RegistryConfig;
pub use resolve_config::ResolveConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration, aggregating every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    pub resolve: ResolveConfig,
    pub registry: RegistryConfig,
    pub layout: LayoutConfig,
    pub generative: GenerativeConfig,
}
