//! Kernel module loader backed by `modprobe` and `/sys/module`.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{CommandRunner, ModuleLoader};
use crate::infra::command_runner::ensure_success;

const SYS_MODULE_DIR: &str = "/sys/module";

/// Loads modules with `modprobe`; checks presence through sysfs.
///
/// sysfs lists both loadable and built-in modules, so a driver compiled into
/// the kernel counts as loaded.
pub struct Modprobe<R: CommandRunner> {
    runner: R,
    sysfs: PathBuf,
}

impl<R: CommandRunner> Modprobe<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self::with_sysfs(runner, PathBuf::from(SYS_MODULE_DIR))
    }

    /// Use `sysfs` in place of `/sys/module`.
    #[must_use]
    pub fn with_sysfs(runner: R, sysfs: PathBuf) -> Self {
        Self { runner, sysfs }
    }
}

/// sysfs spells module names with underscores (`i2c-dev` → `i2c_dev`).
fn sysfs_name(module: &str) -> String {
    module.replace('-', "_")
}

impl<R: CommandRunner> ModuleLoader for Modprobe<R> {
    async fn is_loaded(&self, module: &str) -> Result<bool> {
        let path = self.sysfs.join(sysfs_name(module));
        let loaded = tokio::fs::try_exists(&path).await?;
        debug!(module, loaded, path = %path.display(), "module state");
        Ok(loaded)
    }

    async fn load(&self, module: &str) -> Result<()> {
        let args = [module];
        let output = self.runner.run("modprobe", &args).await?;
        ensure_success(&output, "modprobe", &args)
    }
}
