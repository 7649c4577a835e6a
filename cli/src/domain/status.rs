//! Observable host state for the installed driver.

use serde::Serialize;

/// systemd registration of the unit: two independent axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ServiceState {
    /// Starts on boot.
    pub enabled: bool,
    /// Currently running.
    pub active: bool,
}

/// Snapshot of everything the installer touches on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallStatus {
    pub module: String,
    pub module_loaded: bool,
    pub binary_present: bool,
    /// Deployed binary carries an execute bit.
    pub binary_executable: bool,
    pub unit_present: bool,
    pub unit: String,
    pub service: ServiceState,
}

impl InstallStatus {
    /// Executable binary and unit deployed, service enabled and running.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.binary_present
            && self.binary_executable
            && self.unit_present
            && self.service.enabled
            && self.service.active
    }

    /// Nothing deployed and nothing registered. The module is ignored since
    /// uninstall never unloads it.
    #[must_use]
    pub fn is_uninstalled(&self) -> bool {
        !self.binary_present && !self.unit_present && !self.service.enabled && !self.service.active
    }

    /// One-word summary for the status header.
    #[must_use]
    pub fn summary(&self) -> &'static str {
        if self.is_installed() {
            "installed"
        } else if self.is_uninstalled() {
            "not installed"
        } else {
            "partially installed"
        }
    }
}
