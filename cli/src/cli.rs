//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;
use crate::output::OutputContext;

/// Install and remove the Asus touchpad numpad driver service
#[derive(Parser)]
#[command(
    name = "asus-touchpad-installer",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log diagnostics to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load i2c-dev, deploy the driver and start its service (requires root)
    Install(commands::InstallArgs),

    /// Stop and remove the driver service (requires root)
    Uninstall,

    /// Show what is currently installed
    Status(commands::StatusArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(OutputContext::new(no_color, quiet));
        match command {
            Command::Install(args) => commands::install::run(&app, &args).await,
            Command::Uninstall => commands::uninstall::run(&app).await,
            Command::Status(args) => commands::status::run(&app, &args).await,
            Command::Version => {
                commands::version::run();
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
