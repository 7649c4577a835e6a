//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `std` and `anyhow`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned or awaited.
    /// A non-zero exit status is reported through the returned `Output`.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Host Resource Ports ───────────────────────────────────────────────────────

/// Reads the identity the process is running as.
pub trait PrivilegeProbe {
    /// Effective user id of the current process.
    fn effective_uid(&self) -> u32;
}

/// Kernel module table.
#[allow(async_fn_in_trait)]
pub trait ModuleLoader {
    /// Whether `module` is present in the running kernel (loaded or built in).
    async fn is_loaded(&self, module: &str) -> Result<bool>;
    /// Load `module`. Loading an already-loaded module succeeds.
    async fn load(&self, module: &str) -> Result<()>;
}

/// Filesystem operations used to deploy and remove the artifact set.
pub trait ArtifactStore {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
    /// Create `path` and all missing parents. No-op if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Copy `from` to `to`, replacing whatever is at `to`.
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
    /// Write `contents` to `path`, replacing whatever is there.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    /// Set the Unix permission bits of `path`.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;
    /// Whether `path` has any executable bit set.
    fn is_executable(&self, path: &Path) -> bool;
    /// Remove the file at `path`. Returns `false` if it was already absent.
    fn remove_file(&self, path: &Path) -> Result<bool>;
    /// Remove the directory at `path` if it exists and is empty.
    /// Returns `true` if it was removed.
    fn remove_dir_if_empty(&self, path: &Path) -> Result<bool>;
}

/// Host service manager (systemd).
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    /// Re-read unit files after one was added or removed.
    async fn reload(&self) -> Result<()>;
    /// Persist boot-time activation of `unit`.
    async fn enable(&self, unit: &str) -> Result<()>;
    /// Remove boot-time activation of `unit`.
    async fn disable(&self, unit: &str) -> Result<()>;
    /// Transition `unit` to active.
    async fn start(&self, unit: &str) -> Result<()>;
    /// Transition `unit` to inactive, cancelling any pending restart.
    /// Stopping a unit the manager has not loaded succeeds.
    async fn stop(&self, unit: &str) -> Result<()>;
    /// Whether `unit` starts on boot. Unknown units are not enabled.
    async fn is_enabled(&self, unit: &str) -> Result<bool>;
    /// Whether `unit` is running. Unknown units, and units that are starting,
    /// stopping or waiting to restart, are not active.
    async fn is_active(&self, unit: &str) -> Result<bool>;
}

/// Composite trait: any type implementing all four host ports is a `Host`.
pub trait Host: PrivilegeProbe + ModuleLoader + ArtifactStore + ServiceManager {}

/// Blanket implementation: any type implementing all four host ports is a `Host`.
impl<T> Host for T where T: PrivilegeProbe + ModuleLoader + ArtifactStore + ServiceManager {}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
