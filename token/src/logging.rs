//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

use crate::TokenConfig;

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable for filtering. Idempotent:
/// repeated calls (e.g. across tests) leave the first subscriber in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Initialize logging from a [`TokenConfig`]'s `log_level` / `log_format`.
///
/// `RUST_LOG` still wins over the configured level when set.
pub fn init_from_config(config: &TokenConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    if config.log_format == "json" {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
