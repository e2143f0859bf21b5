//! Shared outbound HTTP plumbing: pooled client construction and the
//! per-call timeout policy.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use strata_core::errors::ProviderError;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("strata/", env!("CARGO_PKG_VERSION"));

/// Build a pooled client with the standard user agent and a hard request
/// timeout.
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Bound an adapter call: elapsed deadline becomes `ProviderError::Timeout`,
/// which the adapter reports as `Unavailable` like any other failure.
pub async fn with_timeout<T, F>(provider: &str, secs: u64, fut: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(Duration::from_secs(secs), fut).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout {
            provider: provider.to_string(),
            secs,
        }),
    }
}
