//! `asus-touchpad-installer status`: show what is installed.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::status::inspect;
use crate::commands::StatusArgs;
use crate::domain::InstallStatus;
use crate::output::OutputContext;

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn render_human(ctx: &OutputContext, s: &InstallStatus) {
    ctx.title(&format!("asus-touchpad: {}", s.summary()));
    let module = if s.module_loaded { "loaded" } else { "absent" };
    ctx.fact(&format!("module {}", s.module), module, s.module_loaded);
    ctx.fact("binary", yes_no(s.binary_present), s.binary_present);
    ctx.fact("binary executable", yes_no(s.binary_executable), s.binary_executable);
    ctx.fact("unit file", yes_no(s.unit_present), s.unit_present);
    ctx.fact("enabled", yes_no(s.service.enabled), s.service.enabled);
    ctx.fact("active", yes_no(s.service.active), s.service.active);
}

/// Run `asus-touchpad-installer status`.
///
/// # Errors
///
/// Returns an error if the host cannot be queried or JSON serialization fails.
pub async fn run(app: &AppContext, args: &StatusArgs) -> Result<ExitCode> {
    let status = inspect(&app.host, &app.layout).await?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&status).context("JSON serialization failed")?
        );
    } else {
        render_human(&app.output, &status);
    }
    Ok(ExitCode::SUCCESS)
}
