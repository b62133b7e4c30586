//! Launcher selection specs.
//!
//! A spec picks launchers out of a catalog: `includes` is resolved first,
//! then any included name matched by an `excludes` entry is dropped.

use regex_lite::Regex;
use serde::{Deserialize, Deserializer};

/// Error constructing a spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("invalid exclude pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("includes must be \"all\" or a list of names, got \"{0}\"")]
    InvalidIncludes(String),
}

/// Which names to start from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Includes {
    /// Every catalog name, in catalog order.
    #[default]
    All,
    /// These names, in this order.
    Names(Vec<String>),
}

/// A single exclusion rule.
#[derive(Debug, Clone)]
pub enum Exclude {
    /// Matches a name exactly.
    Name(String),
    /// Matches any name the pattern finds a match in (unanchored).
    Pattern(Regex),
}

impl Exclude {
    /// Compile a pattern exclusion.
    pub fn pattern(pattern: &str) -> Result<Self, SpecError> {
        Regex::new(pattern)
            .map(Exclude::Pattern)
            .map_err(|e| SpecError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Exclude::Name(n) => n == name,
            Exclude::Pattern(re) => re.is_match(name),
        }
    }
}

impl PartialEq for Exclude {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Exclude::Name(a), Exclude::Name(b)) => a == b,
            (Exclude::Pattern(a), Exclude::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for Exclude {
    fn from(name: &str) -> Self {
        Exclude::Name(name.to_string())
    }
}

impl From<String> for Exclude {
    fn from(name: String) -> Self {
        Exclude::Name(name)
    }
}

impl From<Regex> for Exclude {
    fn from(re: Regex) -> Self {
        Exclude::Pattern(re)
    }
}

/// Includes-then-excludes filter over a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spec {
    pub includes: Includes,
    pub excludes: Vec<Exclude>,
}

impl Spec {
    /// Everything in the catalog.
    pub fn all() -> Self {
        Self::default()
    }

    /// Exactly these names (before exclusions).
    pub fn names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            includes: Includes::Names(names.into_iter().map(Into::into).collect()),
            excludes: Vec::new(),
        }
    }

    /// Add an exclusion (a literal name, or a compiled `Regex`).
    pub fn exclude(mut self, exclude: impl Into<Exclude>) -> Self {
        self.excludes.push(exclude.into());
        self
    }

    /// Add a pattern exclusion from its source text.
    pub fn exclude_pattern(mut self, pattern: &str) -> Result<Self, SpecError> {
        self.excludes.push(Exclude::pattern(pattern)?);
        Ok(self)
    }

    /// Whether any exclusion matches `name`.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excludes.iter().any(|e| e.matches(name))
    }
}

/// `"all"` selects everything; any other string selects that one name.
impl From<&str> for Spec {
    fn from(s: &str) -> Self {
        if s == "all" {
            Spec::all()
        } else {
            Spec::names([s])
        }
    }
}

impl From<String> for Spec {
    fn from(s: String) -> Self {
        Spec::from(s.as_str())
    }
}

impl From<Includes> for Spec {
    fn from(includes: Includes) -> Self {
        Self {
            includes,
            excludes: Vec::new(),
        }
    }
}

// Serde input forms.

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIncludes {
    Keyword(String),
    Names(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExclude {
    Name(String),
    Pattern { pattern: String },
}

#[derive(Deserialize)]
struct RawSpecTable {
    #[serde(default)]
    includes: Option<RawIncludes>,
    #[serde(default)]
    excludes: Option<Vec<RawExclude>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpec {
    Shorthand(String),
    Table(RawSpecTable),
}

impl RawIncludes {
    fn resolve(self) -> Result<Includes, SpecError> {
        match self {
            RawIncludes::Keyword(k) if k == "all" => Ok(Includes::All),
            RawIncludes::Keyword(k) => Err(SpecError::InvalidIncludes(k)),
            RawIncludes::Names(names) => Ok(Includes::Names(names)),
        }
    }
}

impl RawExclude {
    fn resolve(self) -> Result<Exclude, SpecError> {
        match self {
            RawExclude::Name(name) => Ok(Exclude::Name(name)),
            RawExclude::Pattern { pattern } => Exclude::pattern(&pattern),
        }
    }
}

impl RawSpec {
    fn resolve(self) -> Result<Spec, SpecError> {
        match self {
            RawSpec::Shorthand(s) => Ok(Spec::from(s)),
            RawSpec::Table(table) => {
                let includes = match table.includes {
                    Some(raw) => raw.resolve()?,
                    None => Includes::All,
                };
                let excludes = table
                    .excludes
                    .unwrap_or_default()
                    .into_iter()
                    .map(RawExclude::resolve)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Spec { includes, excludes })
            }
        }
    }
}

impl<'de> Deserialize<'de> for Spec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSpec::deserialize(deserializer)?;
        raw.resolve().map_err(serde::de::Error::custom)
    }
}
