//! Command implementations

pub mod install;
pub mod status;
pub mod uninstall;
pub mod version;

use std::path::PathBuf;

use clap::Args;

use crate::domain::layout::DEFAULT_BINARY_SOURCE;

/// Arguments for the install command.
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Driver binary to deploy
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BINARY_SOURCE)]
    pub binary: PathBuf,

    /// Unit file to deploy instead of the built-in asus-touchpad.service
    #[arg(long, value_name = "PATH")]
    pub unit: Option<PathBuf>,
}

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
