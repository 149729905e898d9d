// ============================================================================
// Logging Bootstrap
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when set. Fails if a
/// global subscriber is already installed or the filter does not parse.
pub fn init_logging(default_filter: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| format!("Invalid log filter: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))
}
