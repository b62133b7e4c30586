//! Layered configuration
//!
//! Three layers merge in precedence order:
//! 1. Built-in defaults
//! 2. Config file (launchers.toml)
//! 3. CLI flags

mod defaults;
mod matrix;
mod merge;
mod resolved;

pub use defaults::BuiltinDefaults;
pub use matrix::{GenerateError, MatrixConfig};
pub use merge::{deep_merge, merge_layers};
pub use resolved::{
    ConfigError, ConfigOrigin, ConfigSource, ResolvedConfig, DEFAULT_CONFIG_FILE, SCHEMA_ID,
    SCHEMA_VERSION,
};
