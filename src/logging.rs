//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// The filter comes from `STUDYMATE_LOG`, then `RUST_LOG`, and defaults to
/// `warn` so that fallbacks (offline quote service, unreadable saved state)
/// are visible without drowning normal output. Calling this twice is harmless.
pub fn init() {
    let filter = std::env::var("STUDYMATE_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
