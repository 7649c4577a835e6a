//! Read-only inspection of the installed driver.

use anyhow::{Context, Result};

use crate::application::ports::{ArtifactStore, ModuleLoader, ServiceManager};
use crate::domain::{InstallLayout, InstallStatus, ServiceState};

/// Collect the current install state. Mutates nothing and needs no privileges.
///
/// # Errors
///
/// Returns an error if the module table or the service manager cannot be
/// queried.
pub async fn inspect(
    host: &(impl ModuleLoader + ArtifactStore + ServiceManager),
    layout: &InstallLayout,
) -> Result<InstallStatus> {
    let module_loaded = host
        .is_loaded(&layout.module)
        .await
        .with_context(|| format!("querying kernel module {}", layout.module))?;
    let enabled = host
        .is_enabled(&layout.unit_name)
        .await
        .with_context(|| format!("querying {}", layout.unit_name))?;
    let active = host
        .is_active(&layout.unit_name)
        .await
        .with_context(|| format!("querying {}", layout.unit_name))?;

    Ok(InstallStatus {
        module: layout.module.clone(),
        module_loaded,
        binary_present: host.exists(&layout.binary_path),
        binary_executable: host.is_executable(&layout.binary_path),
        unit_present: host.exists(&layout.unit_path),
        unit: layout.unit_name.clone(),
        service: ServiceState { enabled, active },
    })
}
