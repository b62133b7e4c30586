//! Launcher configuration builder.
//!
//! A [`ConfigBuilder`] owns one immutable [`Catalog`] built from its
//! [`BuilderOptions`] and answers [`Spec`] queries against it. Every query
//! returns freshly cloned descriptors, so callers may edit the result
//! without affecting the builder.

mod spec;

pub use spec::{Exclude, Includes, Spec, SpecError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::catalog::{Catalog, LauncherDescriptor, LauncherMap};

/// Launcher family used when no base is configured.
pub const DEFAULT_BASE: &str = "BrowserStack";

/// Builder construction options. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Launcher family for every entry (default: "BrowserStack").
    /// An empty string also selects the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Prepended to every launcher name (default: "").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Include mobile device launchers.
    pub mobile: bool,
}

impl BuilderOptions {
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }

    fn resolved_base(&self) -> &str {
        match self.base.as_deref() {
            Some(b) if !b.is_empty() => b,
            _ => DEFAULT_BASE,
        }
    }

    fn resolved_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }
}

/// Lookup failure while resolving a spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// An included name is not in the catalog.
    #[error("{name} is not an existing key")]
    UnknownName { name: String },
}

/// Builds named launcher configurations from a fixed catalog.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    base: String,
    prefix: String,
    mobile: bool,
    catalog: Catalog,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new(BuilderOptions::default())
    }
}

impl ConfigBuilder {
    /// Create a builder. Never fails: every option has a default.
    pub fn new(options: BuilderOptions) -> Self {
        let base = options.resolved_base().to_string();
        let prefix = options.resolved_prefix().to_string();
        let catalog = Catalog::build(&base, &prefix, options.mobile);

        Self {
            base,
            prefix,
            mobile: options.mobile,
            catalog,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn mobile(&self) -> bool {
        self.mobile
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.catalog.names()
    }

    /// Select launchers from the catalog.
    ///
    /// `spec` may be `"all"`, a single launcher name, or a full [`Spec`].
    /// Includes are resolved first; an included name missing from the
    /// catalog fails the whole call. Included names matched by any exclude
    /// are then dropped. Repeated include names collapse into one entry.
    pub fn get_configs(
        &self,
        spec: impl Into<Spec>,
    ) -> Result<LauncherMap<LauncherDescriptor>, BuildError> {
        let spec = spec.into();

        let includes: Vec<&str> = match &spec.includes {
            Includes::All => self.catalog.names().collect(),
            Includes::Names(names) => names.iter().map(String::as_str).collect(),
        };

        let mut configs = LauncherMap::new();
        for name in includes {
            let Some(desc) = self.catalog.get(name) else {
                debug!(name, prefix = %self.prefix, "unknown launcher name");
                return Err(BuildError::UnknownName {
                    name: name.to_string(),
                });
            };

            if spec.is_excluded(name) {
                trace!(name, "launcher excluded");
                continue;
            }

            configs.insert(name, desc.clone());
        }

        debug!(
            selected = configs.len(),
            excludes = spec.excludes.len(),
            "resolved launcher spec"
        );
        Ok(configs)
    }
}
