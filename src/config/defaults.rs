//! Built-in defaults (layer 1)
//!
//! Hardcoded values used when neither a config file nor a CLI flag sets them.

use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_BASE;

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Launcher family (default: "BrowserStack")
    pub base: String,

    /// Launcher name prefix (default: "")
    pub prefix: String,

    /// Include mobile launchers (default: false)
    pub mobile: bool,

    /// Includes keyword (default: "all")
    pub includes: String,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            prefix: String::new(),
            mobile: false,
            includes: "all".to_string(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "options": {
                "base": self.base,
                "prefix": self.prefix,
                "mobile": self.mobile
            },
            "spec": {
                "includes": self.includes,
                "excludes": []
            },
            "extra": {}
        })
    }
}
