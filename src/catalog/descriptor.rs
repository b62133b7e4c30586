//! Launcher descriptor: one browser/OS/device combination.

use serde::{Deserialize, Serialize};

/// Description of a single remote browser launcher.
///
/// Serializes to the shape a Karma `customLaunchers` entry expects:
/// optional fields are left out entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherDescriptor {
    /// Launcher family this entry customizes (e.g. "BrowserStack").
    pub base: String,

    pub browser: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_version: Option<String>,

    pub os: String,

    pub os_version: String,

    /// Device name, mobile entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Run on a physical device rather than an emulator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_mobile: Option<bool>,
}

impl LauncherDescriptor {
    /// Create a desktop descriptor with no version pin and no device.
    pub fn new(
        base: impl Into<String>,
        browser: impl Into<String>,
        os: impl Into<String>,
        os_version: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            browser: browser.into(),
            browser_version: None,
            os: os.into(),
            os_version: os_version.into(),
            device: None,
            real_mobile: None,
        }
    }

    /// Pin the browser version.
    pub fn with_browser_version(mut self, version: impl Into<String>) -> Self {
        self.browser_version = Some(version.into());
        self
    }

    /// Target a specific device.
    pub fn with_device(mut self, device: impl Into<String>, real_mobile: bool) -> Self {
        self.device = Some(device.into());
        self.real_mobile = Some(real_mobile);
        self
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_some()
    }
}
