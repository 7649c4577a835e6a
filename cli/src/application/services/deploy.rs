//! File deployer. Places the driver binary and unit file at their fixed
//! install paths, and removes them again.

use std::path::{Path, PathBuf};

use crate::application::ports::{ArtifactStore, ProgressReporter};
use crate::domain::{InstallError, InstallLayout};

/// Mode of the deployed driver binary.
pub const BINARY_MODE: u32 = 0o755;
/// Mode of the deployed unit file.
pub const UNIT_MODE: u32 = 0o644;

/// Where the unit definition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSource {
    /// Unit text held in memory (the definition shipped with the installer).
    Inline(&'static str),
    /// A unit file on disk.
    File(PathBuf),
}

/// The two source artifacts deployed on install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSources {
    /// Compiled driver binary.
    pub binary: PathBuf,
    /// Service unit definition.
    pub unit: UnitSource,
}

/// Copy the binary and the unit definition into place.
///
/// Both sources are checked before anything is written. Existing targets are
/// overwritten unconditionally.
///
/// # Errors
///
/// Returns [`InstallError::Fs`] if a source is missing or any filesystem
/// operation fails. Nothing is rolled back.
pub fn deploy(
    store: &impl ArtifactStore,
    layout: &InstallLayout,
    sources: &ArtifactSources,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    if !store.exists(&sources.binary) {
        return Err(InstallError::fs(
            format!("find driver binary at {}", sources.binary.display()),
            anyhow::anyhow!(
                "no such file; build the driver first (cargo build --release) or pass --binary"
            ),
        ));
    }
    if let UnitSource::File(path) = &sources.unit {
        if !store.exists(path) {
            return Err(InstallError::fs(
                format!("find unit file at {}", path.display()),
                anyhow::anyhow!("no such file"),
            ));
        }
    }

    create_dir(store, &layout.install_dir)?;

    reporter.step(&format!("Copying driver to {}...", layout.binary_path.display()));
    store
        .copy(&sources.binary, &layout.binary_path)
        .map_err(|e| InstallError::fs("copy driver binary", e))?;
    chmod(store, &layout.binary_path, BINARY_MODE)?;
    reporter.success(&format!("Installed {}", layout.binary_path.display()));

    if let Some(unit_dir) = layout.unit_path.parent() {
        create_dir(store, unit_dir)?;
    }
    let placed = match &sources.unit {
        UnitSource::Inline(text) => store.write(&layout.unit_path, text.as_bytes()),
        UnitSource::File(path) => store.copy(path, &layout.unit_path),
    };
    placed.map_err(|e| InstallError::fs("copy unit file", e))?;
    chmod(store, &layout.unit_path, UNIT_MODE)?;
    reporter.success(&format!("Installed {}", layout.unit_path.display()));

    Ok(())
}

/// Remove the binary and the unit file.
///
/// Targets that are already gone count as removed. The install directory is
/// removed too once it is empty; if something else still lives there it is
/// kept and reported as a warning.
///
/// # Errors
///
/// Returns [`InstallError::Fs`] if a removal fails for any reason other than
/// the target being absent.
pub fn undeploy(
    store: &impl ArtifactStore,
    layout: &InstallLayout,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    for (label, path) in [
        ("driver binary", &layout.binary_path),
        ("unit file", &layout.unit_path),
    ] {
        let removed = store
            .remove_file(path)
            .map_err(|e| InstallError::fs(format!("remove {label}"), e))?;
        if removed {
            reporter.success(&format!("Removed {}", path.display()));
        } else {
            reporter.step(&format!("{} already absent", path.display()));
        }
    }

    let dir = &layout.install_dir;
    let removed = store
        .remove_dir_if_empty(dir)
        .map_err(|e| InstallError::fs("remove install directory", e))?;
    if !removed && store.exists(dir) {
        reporter.warn(&format!(
            "Kept {}: it holds files the installer did not put there",
            dir.display()
        ));
    }
    Ok(())
}

fn create_dir(store: &impl ArtifactStore, dir: &Path) -> Result<(), InstallError> {
    store
        .create_dir_all(dir)
        .map_err(|e| InstallError::fs(format!("create directory {}", dir.display()), e))
}

fn chmod(store: &impl ArtifactStore, path: &Path, mode: u32) -> Result<(), InstallError> {
    store
        .set_permissions(path, mode)
        .map_err(|e| InstallError::fs(format!("set mode {mode:o} on {}", path.display()), e))
}
