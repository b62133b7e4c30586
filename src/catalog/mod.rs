//! Fixed launcher catalog
//!
//! The catalog is built once from a static table of known browser/OS
//! combinations. Every entry gets the same `base`, and every name is the
//! caller's prefix followed by the entry's fixed suffix.

mod descriptor;
mod map;

pub use descriptor::LauncherDescriptor;
pub use map::{Iter, LauncherMap};

use tracing::debug;

/// Desktop launchers in catalog order
/// (suffix, browser, browser_version, os, os_version).
const DESKTOP_TEMPLATE: &[(&str, &str, Option<&str>, &str, &str)] = &[
    ("ChromeWin", "Chrome", None, "Windows", "10"),
    ("FirefoxWin", "Firefox", None, "Windows", "10"),
    ("OperaWin", "Opera", None, "Windows", "8"),
    ("Edge", "Edge", None, "Windows", "10"),
    ("IE11", "IE", Some("11"), "Windows", "10"),
    ("IE10", "IE", Some("10"), "Windows", "8"),
    ("IE9", "IE", Some("9"), "Windows", "7"),
    ("IE8", "IE", Some("8"), "Windows", "7"),
    ("Safari12", "Safari", None, "OS X", "Mojave"),
    ("Safari11", "Safari", None, "OS X", "High Sierra"),
    ("Safari10", "Safari", None, "OS X", "Sierra"),
    ("Safari9", "Safari", None, "OS X", "El Capitan"),
];

/// Mobile device launcher (suffix, browser, os, os_version, device, real_mobile).
const MOBILE_TEMPLATE: &[(&str, &str, &str, &str, &str, bool)] = &[(
    "Android4_4",
    "android",
    "android",
    "4.4",
    "Samsung Galaxy Tab 4",
    true,
)];

/// Immutable set of named launchers owned by a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: LauncherMap<LauncherDescriptor>,
}

impl Catalog {
    /// Build the catalog for the given base and name prefix.
    ///
    /// Mobile entries are appended after all desktop entries when `mobile`
    /// is set and are absent otherwise.
    pub fn build(base: &str, prefix: &str, mobile: bool) -> Self {
        let mut entries = LauncherMap::new();

        for &(suffix, browser, browser_version, os, os_version) in DESKTOP_TEMPLATE {
            let mut desc = LauncherDescriptor::new(base, browser, os, os_version);
            if let Some(version) = browser_version {
                desc = desc.with_browser_version(version);
            }
            entries.insert(format!("{}{}", prefix, suffix), desc);
        }

        if mobile {
            for &(suffix, browser, os, os_version, device, real_mobile) in MOBILE_TEMPLATE {
                let desc = LauncherDescriptor::new(base, browser, os, os_version)
                    .with_device(device, real_mobile);
                entries.insert(format!("{}{}", prefix, suffix), desc);
            }
        }

        debug!(base, prefix, mobile, launchers = entries.len(), "built launcher catalog");
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&LauncherDescriptor> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Launcher names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, LauncherDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
