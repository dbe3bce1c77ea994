//! Diagnostic logging
//!
//! Library code emits `tracing` events; the binary installs a subscriber
//! that writes them to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this more than
/// once keeps the first subscriber.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        init("not a valid filter ===");
        tracing::debug!("logging initialized twice without panicking");
    }
}
