//! Fixed install locations for the driver and its service unit.

use std::path::{Path, PathBuf};

/// Name of the deployed driver binary.
pub const BINARY_NAME: &str = "asus-touchpad";

/// Name of the systemd unit that supervises the driver.
pub const UNIT_NAME: &str = "asus-touchpad.service";

/// Kernel module the driver needs to talk to the touchpad over I2C.
pub const KERNEL_MODULE: &str = "i2c-dev";

/// Application-data directory holding the driver binary.
pub const INSTALL_DIR: &str = "/usr/share/asus-touchpad";

/// systemd search path for administrator-installed units.
pub const UNIT_DIR: &str = "/etc/systemd/system";

/// Where `cargo build --release` leaves the driver binary.
pub const DEFAULT_BINARY_SOURCE: &str = "target/release/asus-touchpad";

/// Install targets, unit name and module name used by the lifecycle pipelines.
///
/// The CLI always uses [`InstallLayout::system`]. [`InstallLayout::rooted_at`]
/// re-bases the same layout under another directory so the pipelines can be
/// exercised against a scratch filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    /// Directory created to hold the binary.
    pub install_dir: PathBuf,
    /// Absolute path of the deployed binary.
    pub binary_path: PathBuf,
    /// Absolute path of the deployed unit file.
    pub unit_path: PathBuf,
    /// systemd unit name, e.g. `asus-touchpad.service`.
    pub unit_name: String,
    /// Kernel module loaded on install.
    pub module: String,
}

impl InstallLayout {
    /// The real host layout.
    #[must_use]
    pub fn system() -> Self {
        Self::rooted_at(Path::new("/"))
    }

    /// The host layout re-based under `root`.
    #[must_use]
    pub fn rooted_at(root: &Path) -> Self {
        let rebase = |abs: &str| root.join(abs.trim_start_matches('/'));
        let install_dir = rebase(INSTALL_DIR);
        Self {
            binary_path: install_dir.join(BINARY_NAME),
            install_dir,
            unit_path: rebase(UNIT_DIR).join(UNIT_NAME),
            unit_name: UNIT_NAME.to_string(),
            module: KERNEL_MODULE.to_string(),
        }
    }
}
