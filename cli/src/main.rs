//! asus-touchpad-installer: installs the Asus touchpad numpad driver as a
//! systemd service.

use std::process::ExitCode;

use clap::Parser;
use touchpad_installer::cli::Cli;
use touchpad_installer::domain::exit_code_for;
use touchpad_installer::logging;
use touchpad_installer::output::OutputContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let no_color = cli.no_color;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            OutputContext::new(no_color, false).error(&format!("{e:#}"));
            ExitCode::from(exit_code_for(&e))
        }
    }
}
