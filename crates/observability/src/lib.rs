//! Tracing and logging setup shared by hotel binaries and tests.

/// Environment configuration (`RUST_LOG`, `HOTEL_LOG_FORMAT`).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// An invalid `HOTEL_LOG_FORMAT` falls back to the default config. This is safe
/// to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_default();
    tracing::init_with(&config);
}
