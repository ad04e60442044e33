//! Tracing/logging setup shared by binaries and tests embedding the
//! invoicing crates.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&config::ObservabilityConfig::from_env());
}

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
pub use self::tracing::init_with;

/// Environment-driven configuration.
pub mod config;

/// Subscriber installation (filters, formatting layers).
pub mod tracing;
