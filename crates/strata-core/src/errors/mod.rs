//! Error taxonomy for the Strata workspace.
//!
//! Provider failures never escape the adapter layer: they are converted to
//! `ResolveOutcome::Unavailable` at every boundary. The only errors that
//! cross the registry boundary are the registry's own.

mod provider_error;
mod registry_error;

pub use provider_error::ProviderError;
pub use registry_error::RegistryError;

/// Top-level error type aggregating every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Convenience result alias used across the workspace.
pub type StrataResult<T> = Result<T, StrataError>;
