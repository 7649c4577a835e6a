//! Shared fake host for pipeline tests.
//!
//! `FakeHost` implements every host port. Filesystem calls go to a real
//! `LocalFs` under a scratch directory; the module table and systemd are kept
//! in memory. Every mutating call is appended to an event log so tests can
//! assert on ordering.

#![allow(clippy::expect_used, dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tempfile::TempDir;
use touchpad_installer::application::ports::{
    ArtifactStore, ModuleLoader, PrivilegeProbe, ProgressReporter, ServiceManager,
};
use touchpad_installer::application::services::deploy::{ArtifactSources, UnitSource};
use touchpad_installer::domain::{InstallLayout, ServiceState};
use touchpad_installer::infra::assets::SERVICE_UNIT;
use touchpad_installer::infra::fs::LocalFs;

/// Event logged when the privilege probe is read.
pub const EUID_EVENT: &str = "euid";

pub struct FakeHost {
    uid: u32,
    root: TempDir,
    layout: InstallLayout,
    module_loaded: Mutex<bool>,
    service: Mutex<ServiceState>,
    failing: Mutex<Vec<&'static str>>,
    events: Mutex<Vec<String>>,
}

impl FakeHost {
    /// Host where the process runs as root and nothing is installed yet.
    pub fn as_root() -> Self {
        Self::as_uid(0)
    }

    /// Host where the process runs as `uid` and nothing is installed yet.
    pub fn as_uid(uid: u32) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let layout = InstallLayout::rooted_at(root.path());
        Self {
            uid,
            root,
            layout,
            module_loaded: Mutex::new(false),
            service: Mutex::new(ServiceState::default()),
            failing: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Pretend the kernel module is already present.
    #[must_use]
    pub fn with_module_loaded(self) -> Self {
        *self.module_loaded.lock().expect("lock") = true;
        self
    }

    /// Make the named operation (`modprobe`, `copy`, `reload`, `enable`,
    /// `start`, `stop`, `disable`) fail.
    #[must_use]
    pub fn failing(self, op: &'static str) -> Self {
        self.failing.lock().expect("lock").push(op);
        self
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// A freshly "built" driver binary, deliberately not executable.
    pub fn built_binary(&self) -> PathBuf {
        let dir = self.root.path().join("build");
        std::fs::create_dir_all(&dir).expect("mkdir build");
        let path = dir.join("asus-touchpad");
        std::fs::write(&path, b"\x7fELF fake driver").expect("write binary");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).expect("chmod");
        path
    }

    /// Sources for a default install: built binary plus the embedded unit.
    pub fn sources(&self) -> ArtifactSources {
        ArtifactSources {
            binary: self.built_binary(),
            unit: UnitSource::Inline(SERVICE_UNIT),
        }
    }

    pub fn module_loaded(&self) -> bool {
        *self.module_loaded.lock().expect("lock")
    }

    pub fn service(&self) -> ServiceState {
        *self.service.lock().expect("lock")
    }

    /// Every logged event, in call order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("lock").clone()
    }

    /// Logged events minus the privilege read.
    pub fn mutations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e != EUID_EVENT)
            .collect()
    }

    pub fn clear_events(&self) {
        self.events.lock().expect("lock").clear();
    }

    fn log(&self, event: String) {
        self.events.lock().expect("lock").push(event);
    }

    fn check(&self, op: &str) -> Result<()> {
        if self.failing.lock().expect("lock").iter().any(|f| *f == op) {
            anyhow::bail!("injected {op} failure");
        }
        Ok(())
    }

    fn rel(&self, path: &Path) -> String {
        path.strip_prefix(self.root.path())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn unit_known(&self, unit: &str) -> Result<()> {
        if !self.layout.unit_path.exists() {
            anyhow::bail!("Unit {unit} not found.");
        }
        Ok(())
    }
}

impl PrivilegeProbe for FakeHost {
    fn effective_uid(&self) -> u32 {
        self.log(EUID_EVENT.to_string());
        self.uid
    }
}

impl ModuleLoader for FakeHost {
    async fn is_loaded(&self, _module: &str) -> Result<bool> {
        Ok(self.module_loaded())
    }

    async fn load(&self, module: &str) -> Result<()> {
        self.log(format!("modprobe {module}"));
        self.check("modprobe")?;
        *self.module_loaded.lock().expect("lock") = true;
        Ok(())
    }
}

impl ArtifactStore for FakeHost {
    fn exists(&self, path: &Path) -> bool {
        LocalFs.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.log(format!("mkdir {}", self.rel(path)));
        LocalFs.create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        self.log(format!("copy {} -> {}", self.rel(from), self.rel(to)));
        self.check("copy")?;
        LocalFs.copy(from, to)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.log(format!("write {}", self.rel(path)));
        LocalFs.write(path, contents)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.log(format!("chmod {mode:o} {}", self.rel(path)));
        LocalFs.set_permissions(path, mode)
    }

    fn is_executable(&self, path: &Path) -> bool {
        LocalFs.is_executable(path)
    }

    fn remove_file(&self, path: &Path) -> Result<bool> {
        self.log(format!("rm {}", self.rel(path)));
        LocalFs.remove_file(path)
    }

    fn remove_dir_if_empty(&self, path: &Path) -> Result<bool> {
        self.log(format!("rmdir {}", self.rel(path)));
        LocalFs.remove_dir_if_empty(path)
    }
}

impl ServiceManager for FakeHost {
    async fn reload(&self) -> Result<()> {
        self.log("daemon-reload".to_string());
        self.check("reload")
    }

    async fn enable(&self, unit: &str) -> Result<()> {
        self.log(format!("enable {unit}"));
        self.check("enable")?;
        self.unit_known(unit)?;
        self.service.lock().expect("lock").enabled = true;
        Ok(())
    }

    async fn disable(&self, unit: &str) -> Result<()> {
        self.log(format!("disable {unit}"));
        self.check("disable")?;
        self.unit_known(unit)?;
        self.service.lock().expect("lock").enabled = false;
        Ok(())
    }

    async fn start(&self, unit: &str) -> Result<()> {
        self.log(format!("start {unit}"));
        self.check("start")?;
        self.unit_known(unit)?;
        self.service.lock().expect("lock").active = true;
        Ok(())
    }

    async fn stop(&self, unit: &str) -> Result<()> {
        self.log(format!("stop {unit}"));
        self.check("stop")?;
        self.service.lock().expect("lock").active = false;
        Ok(())
    }

    async fn is_enabled(&self, _unit: &str) -> Result<bool> {
        Ok(self.service().enabled)
    }

    async fn is_active(&self, _unit: &str) -> Result<bool> {
        Ok(self.service().active)
    }
}

// ── Reporters ─────────────────────────────────────────────────────────────────

pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

/// Collects every message with a one-letter kind prefix (`>`, `+`, `!`).
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock").clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("> {message}"));
    }
    fn success(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("+ {message}"));
    }
    fn warn(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("! {message}"));
    }
}
