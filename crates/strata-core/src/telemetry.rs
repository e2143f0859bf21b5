//! Tracing subscriber setup.
//!
//! Every subsystem logs through `tracing`; embedding applications call
//! [`init`] once at startup. Respects `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
