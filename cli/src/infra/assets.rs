//! Embedded assets: the service unit compiled into the installer binary.

/// systemd unit definition for the driver, deployed when `--unit` is not given.
pub const SERVICE_UNIT: &str = include_str!("../../assets/asus-touchpad.service");
