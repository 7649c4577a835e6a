//! `asus-touchpad-installer uninstall`: stop, disable and remove the driver.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle;
use crate::output::TerminalReporter;

/// Run `asus-touchpad-installer uninstall`.
///
/// # Errors
///
/// Returns the failing step's `InstallError` (wrapped in `anyhow`).
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let ctx = &app.output;
    ctx.title("Uninstalling asus-touchpad driver");

    let reporter = TerminalReporter::new(ctx);
    lifecycle::uninstall(&app.host, &app.layout, &reporter).await?;

    ctx.success(&format!("{} has been removed.", app.layout.unit_name));
    ctx.note(&format!(
        "Kernel module {} was left loaded; other devices may use it.",
        app.layout.module
    ));
    Ok(ExitCode::SUCCESS)
}
