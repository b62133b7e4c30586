//! Launcher Matrix - named browser launchers for cross-browser test runs
//!
//! This crate builds the named browser/OS launcher entries a test runner
//! hands to a remote browser-testing cloud, filters them with an
//! include/exclude spec, and lints the final mapping so it is neither
//! empty nor running the same browser twice.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod logging;

pub use builder::{BuildError, BuilderOptions, ConfigBuilder, Exclude, Includes, Spec, SpecError};
pub use catalog::{Catalog, LauncherDescriptor, LauncherMap};
pub use config::{GenerateError, MatrixConfig, ResolvedConfig};
pub use launcher_lint::{
    lint_config, no_duplicates, not_empty, JsonLauncher, LintError, LintReport,
};
