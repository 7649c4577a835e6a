//! Kernel module activator.

use crate::application::ports::{ModuleLoader, ProgressReporter};
use crate::domain::InstallError;

/// Make sure `module` is present in the running kernel.
///
/// Skips the load when the module is already there; otherwise asks the
/// loader to load it. Never unloads anything.
///
/// # Errors
///
/// Returns [`InstallError::Module`] if the state query or the load fails.
pub async fn ensure_module_loaded(
    loader: &impl ModuleLoader,
    module: &str,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    let wrap = |source| InstallError::Module {
        module: module.to_string(),
        source,
    };

    if loader.is_loaded(module).await.map_err(wrap)? {
        reporter.success(&format!("Kernel module {module} already loaded"));
        return Ok(());
    }

    reporter.step(&format!("Loading kernel module {module}..."));
    loader.load(module).await.map_err(wrap)?;
    reporter.success(&format!("Kernel module {module} loaded"));
    Ok(())
}
