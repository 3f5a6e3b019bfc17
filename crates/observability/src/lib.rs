//! Tracing and logging setup shared by the retail binaries.

/// Initialize process-wide tracing/logging from the environment.
///
/// Falls back to JSON logs when `RETAIL_LOG_FORMAT` is unusable (the problem
/// is reported once the subscriber is up). Safe to call multiple times.
pub fn init() {
    match LogConfig::from_env() {
        Ok(config) => tracing::init(&config),
        Err(err) => {
            tracing::init(&LogConfig::default());
            ::tracing::warn!(error = %err, "ignoring invalid logging configuration");
        }
    }
}

/// Logging configuration read from the environment.
pub mod config;

/// Subscriber construction (filters, formatters).
pub mod tracing;

pub use config::{ConfigError, LogConfig, LogFormat};
