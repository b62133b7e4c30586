//! Typed launcher matrix configuration and generation.

use serde::Deserialize;
use tracing::debug;

use crate::builder::{BuildError, BuilderOptions, ConfigBuilder, Spec};
use crate::catalog::{LauncherDescriptor, LauncherMap};
use launcher_lint::{lint_config, LintError};

/// Merged configuration: builder options, selection spec, and extra
/// launchers appended after generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub options: BuilderOptions,

    pub spec: Spec,

    /// Hand-written launchers merged over the generated ones.
    pub extra: LauncherMap<LauncherDescriptor>,
}

/// Failure while producing the final launcher mapping.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Lint(#[from] LintError),
}

impl MatrixConfig {
    pub fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new(self.options.clone())
    }

    /// Select launchers and merge the extras over them, without linting.
    ///
    /// An extra launcher whose name was generated replaces it in place;
    /// other extras are appended.
    pub fn assemble(&self) -> Result<LauncherMap<LauncherDescriptor>, BuildError> {
        let mut launchers = self.builder().get_configs(self.spec.clone())?;
        let generated = launchers.len();
        launchers.merge(self.extra.clone());

        debug!(
            generated,
            extra = self.extra.len(),
            total = launchers.len(),
            "assembled launchers"
        );
        Ok(launchers)
    }

    /// [`assemble`](Self::assemble), then lint the result.
    pub fn generate(&self) -> Result<LauncherMap<LauncherDescriptor>, GenerateError> {
        let launchers = self.assemble()?;
        lint_config(&launchers)?;
        Ok(launchers)
    }
}
