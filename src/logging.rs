//! Diagnostic logging setup for the CLI.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. `RUST_LOG` overrides the requested level.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber. Fails if one is already installed.
pub fn init(level: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}
