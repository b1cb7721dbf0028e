//! Logging setup for the host process.

use crate::config::ServerConfig;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the level filter: `RUST_LOG` when set, otherwise the configured level.
#[must_use]
pub fn env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr; stdout carries protocol frames.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_logging(config: &ServerConfig) -> Result<(), TryInitError> {
    let fmt_layer = if config.json_logs {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    Registry::default()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let config = ServerConfig::default();
        // Another test may already own the global subscriber.
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
