//! Service registrar. Enables/starts and stops/disables the driver unit.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{ProgressReporter, ServiceManager};
use crate::domain::InstallError;

/// Make systemd re-read unit files.
///
/// # Errors
///
/// Returns [`InstallError::Service`] if the reload fails.
pub async fn reload(manager: &impl ServiceManager, unit: &str) -> Result<(), InstallError> {
    manager
        .reload()
        .await
        .map_err(|e| InstallError::service("reload unit files for", unit, e))
}

/// Enable `unit`, then start it.
///
/// If enabling succeeds and starting fails the unit stays enabled; the start
/// error is returned as is. Starting a unit that is already running leaves the
/// old process in place, so that case ends with a restart hint.
///
/// # Errors
///
/// Returns [`InstallError::Service`] naming the call that failed.
pub async fn register_and_start(
    manager: &impl ServiceManager,
    unit: &str,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    let was_running = manager
        .is_active(unit)
        .await
        .map_err(|e| InstallError::service("query state of", unit, e))?;

    manager
        .enable(unit)
        .await
        .map_err(|e| InstallError::service("enable", unit, e))?;
    reporter.success(&format!("Enabled {unit}"));

    reporter.step(&format!("Starting {unit}..."));
    manager
        .start(unit)
        .await
        .map_err(|e| InstallError::service("start", unit, e))?;
    if was_running {
        reporter.warn(&format!(
            "{unit} was already running the previous driver. \
             Run `systemctl restart {unit}` to switch to the new one"
        ));
    } else {
        reporter.success(&format!("Started {unit}"));
    }
    Ok(())
}

/// Stop `unit`, then disable it.
///
/// `stop` is always sent: a unit waiting to auto-restart or still shutting
/// down does not read as active, yet must not outlive its files. Stopping a
/// unit systemd never loaded succeeds. `disable` is skipped when the unit is
/// not enabled.
///
/// # Errors
///
/// Returns [`InstallError::Service`] naming the call that failed.
pub async fn stop_and_deregister(
    manager: &impl ServiceManager,
    unit: &str,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    reporter.step(&format!("Stopping {unit}..."));
    manager
        .stop(unit)
        .await
        .map_err(|e| InstallError::service("stop", unit, e))?;
    reporter.success(&format!("Stopped {unit}"));

    let enabled = manager
        .is_enabled(unit)
        .await
        .map_err(|e| InstallError::service("query state of", unit, e))?;
    if enabled {
        manager
            .disable(unit)
            .await
            .map_err(|e| InstallError::service("disable", unit, e))?;
        reporter.success(&format!("Disabled {unit}"));
    } else {
        reporter.step(&format!("{unit} already disabled"));
    }
    Ok(())
}
