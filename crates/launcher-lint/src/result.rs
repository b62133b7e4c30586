//! Lint error and report types.

use serde::{Deserialize, Serialize};

/// Reason a launcher mapping failed linting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintError {
    /// The mapping has no entries at all.
    #[error("empty configuration")]
    EmptyConfiguration,

    /// Two entries carry structurally identical values.
    /// `key` is the later of the colliding pair.
    #[error("duplicate configuration at key: {key}")]
    DuplicateConfiguration { key: String },
}

impl LintError {
    /// Get a machine-readable string representation.
    pub fn code(&self) -> String {
        match self {
            LintError::EmptyConfiguration => "EMPTY_CONFIGURATION".to_string(),
            LintError::DuplicateConfiguration { key } => {
                format!("DUPLICATE_CONFIGURATION:{}", key)
            }
        }
    }
}

/// Serializable outcome of a lint pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintReport {
    /// Whether every check passed.
    pub valid: bool,

    /// Number of entries inspected.
    pub launchers: usize,

    /// Machine-readable failure code. None when valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable failure message. None when valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LintReport {
    /// Build a report from the result of [`crate::lint_config`].
    pub fn from_result(launchers: usize, result: &Result<(), LintError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                launchers,
                code: None,
                message: None,
            },
            Err(e) => Self {
                valid: false,
                launchers,
                code: Some(e.code()),
                message: Some(e.to_string()),
            },
        }
    }
}
