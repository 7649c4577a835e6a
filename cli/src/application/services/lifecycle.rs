//! Install and uninstall pipelines.
//!
//! Each pipeline is a fixed sequence of steps. The first failing step aborts
//! the rest; nothing already applied is rolled back. Re-running the same
//! command converges on the target state.

use tracing::info;

use crate::application::ports::{Host, ProgressReporter};
use crate::application::services::deploy::{self, ArtifactSources};
use crate::application::services::module::ensure_module_loaded;
use crate::application::services::privilege::check_privilege;
use crate::application::services::registrar;
use crate::domain::{InstallError, InstallLayout};

/// Privilege check, module load, file deployment, then enable and start.
///
/// # Errors
///
/// Returns the [`InstallError`] of the first step that failed.
pub async fn install(
    host: &impl Host,
    layout: &InstallLayout,
    sources: &ArtifactSources,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    check_privilege(host, "install")?;
    info!(unit = %layout.unit_name, "installing");

    ensure_module_loaded(host, &layout.module, reporter).await?;
    deploy::deploy(host, layout, sources, reporter)?;
    registrar::reload(host, &layout.unit_name).await?;
    registrar::register_and_start(host, &layout.unit_name, reporter).await?;

    info!(unit = %layout.unit_name, "install complete");
    Ok(())
}

/// Privilege check, stop and disable, then file removal.
///
/// The kernel module is left loaded.
///
/// # Errors
///
/// Returns the [`InstallError`] of the first step that failed.
pub async fn uninstall(
    host: &impl Host,
    layout: &InstallLayout,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    check_privilege(host, "uninstall")?;
    info!(unit = %layout.unit_name, "uninstalling");

    registrar::stop_and_deregister(host, &layout.unit_name, reporter).await?;
    deploy::undeploy(host, layout, reporter)?;
    registrar::reload(host, &layout.unit_name).await?;

    info!(unit = %layout.unit_name, "uninstall complete");
    Ok(())
}
