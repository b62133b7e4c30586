//! Lint pass for browser launcher mappings.
//!
//! A launcher mapping (name -> launcher description) is rejected when it is
//! empty or when two names describe exactly the same launcher. Running the
//! same browser twice against the remote cloud only burns minutes.
//!
//! The checks are generic over any ordered mapping whose reference iterates
//! `(&key, &value)` pairs, so they apply equally to typed descriptors and to
//! raw JSON values. Raw JSON should be wrapped in [`JsonLauncher`] so that
//! numbers compare by value.

mod json;
mod result;

pub use json::JsonLauncher;
pub use result::{LintError, LintReport};

use tracing::debug;

/// Fail with [`LintError::EmptyConfiguration`] if the mapping has no entries.
pub fn not_empty<'a, M, K, V>(config: &'a M) -> Result<(), LintError>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + 'a,
    V: 'a,
{
    if config.into_iter().next().is_none() {
        return Err(LintError::EmptyConfiguration);
    }
    Ok(())
}

/// Fail on the first entry whose value equals an earlier entry's value.
///
/// Entries are visited in the mapping's iteration order and each one is
/// compared against every value seen before it. The reported key is the
/// later of the two colliding names; scanning stops at the first collision.
pub fn no_duplicates<'a, M, K, V>(config: &'a M) -> Result<(), LintError>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + 'a,
    V: PartialEq + 'a,
{
    let mut seen: Vec<&V> = Vec::new();

    for (key, candidate) in config {
        if seen.iter().any(|prev| *prev == candidate) {
            let key: &str = key.as_ref();
            debug!(key, "duplicate launcher");
            return Err(LintError::DuplicateConfiguration {
                key: key.to_string(),
            });
        }
        seen.push(candidate);
    }

    debug!(launchers = seen.len(), "no duplicate launchers");
    Ok(())
}

/// Run every check in order: [`not_empty`] then [`no_duplicates`].
///
/// The first failure is returned, so an empty mapping always reports
/// [`LintError::EmptyConfiguration`].
pub fn lint_config<'a, M, K, V>(config: &'a M) -> Result<(), LintError>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + 'a,
    V: PartialEq + 'a,
{
    not_empty(config)?;
    no_duplicates(config)
}
