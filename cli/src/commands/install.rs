//! `asus-touchpad-installer install`: load i2c-dev, deploy, enable and start.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::deploy::{ArtifactSources, UnitSource};
use crate::application::services::lifecycle;
use crate::commands::InstallArgs;
use crate::infra::assets::SERVICE_UNIT;
use crate::output::TerminalReporter;

/// Resolve the deploy sources from the command-line arguments.
#[must_use]
pub fn sources(args: &InstallArgs) -> ArtifactSources {
    ArtifactSources {
        binary: args.binary.clone(),
        unit: args
            .unit
            .clone()
            .map_or(UnitSource::Inline(SERVICE_UNIT), UnitSource::File),
    }
}

/// Run `asus-touchpad-installer install`.
///
/// # Errors
///
/// Returns the failing step's `InstallError` (wrapped in `anyhow`).
pub async fn run(app: &AppContext, args: &InstallArgs) -> Result<ExitCode> {
    let ctx = &app.output;
    ctx.title("Installing asus-touchpad driver");

    let reporter = TerminalReporter::new(ctx);
    lifecycle::install(&app.host, &app.layout, &sources(args), &reporter).await?;

    ctx.success(&format!("{} is installed and running.", app.layout.unit_name));
    ctx.note("Check it with: asus-touchpad-installer status");
    Ok(ExitCode::SUCCESS)
}
