//! Filesystem infrastructure: implements `ArtifactStore` on the local disk.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ArtifactStore;

/// Production filesystem implementation of `ArtifactStore`.
///
/// Replacements go through a sibling temp file and a rename, so a binary that
/// is currently executing can be overwritten (a plain truncating copy fails
/// with `ETXTBSY`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

/// `<dir>/.<name>.installing` next to `path`.
fn staging_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".installing");
    Ok(path.with_file_name(staged))
}

/// Run `fill` against a staging file, then rename it over `path`.
fn replace_with(path: &Path, fill: impl FnOnce(&Path) -> std::io::Result<()>) -> Result<()> {
    let staged = staging_path(path)?;
    if let Err(e) = fill(&staged) {
        let _ = std::fs::remove_file(&staged);
        return Err(e).with_context(|| format!("writing {}", staged.display()));
    }
    std::fs::rename(&staged, path)
        .with_context(|| format!("moving {} into place", path.display()))
}

impl ArtifactStore for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        debug!(from = %from.display(), to = %to.display(), "copying");
        replace_with(to, |staged| std::fs::copy(from, staged).map(|_| ()))
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        debug!(path = %path.display(), bytes = contents.len(), "writing");
        replace_with(path, |staged| std::fs::write(staged, contents))
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .with_context(|| format!("setting permissions on {}", path.display()))
    }

    fn is_executable(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "already absent");
                Ok(false)
            }
            Err(e) => Err(e).with_context(|| format!("removing file {}", path.display())),
        }
    }

    fn remove_dir_if_empty(&self, path: &Path) -> Result<bool> {
        match std::fs::read_dir(path) {
            Ok(mut entries) => {
                if entries.next().is_some() {
                    return Ok(false);
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(e).with_context(|| format!("reading directory {}", path.display()));
            }
        }
        std::fs::remove_dir(path)
            .with_context(|| format!("removing directory {}", path.display()))?;
        Ok(true)
    }
}
