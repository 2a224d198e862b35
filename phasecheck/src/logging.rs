//! Diagnostic tracing for the hook.
//!
//! The orchestrator parses stdout: status lines, `--json` payloads and error
//! diagnostics all land there. Tracing events are for whoever debugs the hook
//! itself and go to stderr, filtered by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=phasecheck=debug phasecheck my-feature
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
