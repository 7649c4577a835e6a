//! `SystemHost`: the real machine, composed from the individual adapters.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{
    ArtifactStore, CommandRunner, ModuleLoader, PrivilegeProbe, ServiceManager,
};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::infra::modprobe::Modprobe;
use crate::infra::privilege::EffectiveUser;
use crate::infra::systemd::Systemctl;

/// Every host port, backed by the running system.
pub struct SystemHost<R: CommandRunner> {
    user: EffectiveUser,
    modules: Modprobe<R>,
    fs: LocalFs,
    services: Systemctl<R>,
}

impl<R: CommandRunner + Clone> SystemHost<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self {
            user: EffectiveUser,
            modules: Modprobe::new(runner.clone()),
            fs: LocalFs,
            services: Systemctl::new(runner),
        }
    }
}

impl SystemHost<TokioCommandRunner> {
    /// Host adapters spawning real processes.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> PrivilegeProbe for SystemHost<R> {
    fn effective_uid(&self) -> u32 {
        self.user.effective_uid()
    }
}

impl<R: CommandRunner> ModuleLoader for SystemHost<R> {
    async fn is_loaded(&self, module: &str) -> Result<bool> {
        self.modules.is_loaded(module).await
    }

    async fn load(&self, module: &str) -> Result<()> {
        self.modules.load(module).await
    }
}

impl<R: CommandRunner> ArtifactStore for SystemHost<R> {
    fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.fs.create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        self.fs.copy(from, to)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.fs.write(path, contents)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.fs.set_permissions(path, mode)
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.fs.is_executable(path)
    }

    fn remove_file(&self, path: &Path) -> Result<bool> {
        self.fs.remove_file(path)
    }

    fn remove_dir_if_empty(&self, path: &Path) -> Result<bool> {
        self.fs.remove_dir_if_empty(path)
    }
}

impl<R: CommandRunner> ServiceManager for SystemHost<R> {
    async fn reload(&self) -> Result<()> {
        self.services.reload().await
    }

    async fn enable(&self, unit: &str) -> Result<()> {
        self.services.enable(unit).await
    }

    async fn disable(&self, unit: &str) -> Result<()> {
        self.services.disable(unit).await
    }

    async fn start(&self, unit: &str) -> Result<()> {
        self.services.start(unit).await
    }

    async fn stop(&self, unit: &str) -> Result<()> {
        self.services.stop(unit).await
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        self.services.is_enabled(unit).await
    }

    async fn is_active(&self, unit: &str) -> Result<bool> {
        self.services.is_active(unit).await
    }
}
