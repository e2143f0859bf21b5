/// Provider adapter errors.
///
/// Internal to the provider layer: every adapter converts these into
/// `ResolveOutcome::Unavailable` before returning, so they never terminate
/// a topic resolution.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("malformed response from {provider}: {reason}")]
    MalformedResponse { provider: String, reason: String },

    #[error("request to {provider} timed out after {secs}s")]
    Timeout { provider: String, secs: u64 },
}
