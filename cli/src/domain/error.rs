//! Typed lifecycle errors and their process exit codes.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! Adapters report failures as `anyhow::Error`; the pipeline services wrap
//! them into the [`InstallError`] variant of the step that failed.

use thiserror::Error;

/// Exit status when the process is not running as root.
pub const EXIT_PRIVILEGE: u8 = 1;
/// Exit status when the kernel module could not be loaded.
pub const EXIT_MODULE: u8 = 3;
/// Exit status for copy/remove failures.
pub const EXIT_FS: u8 = 4;
/// Exit status when a systemd call failed.
pub const EXIT_SERVICE: u8 = 5;
/// Exit status for failures outside the lifecycle taxonomy (`EX_SOFTWARE`).
pub const EXIT_UNEXPECTED: u8 = 70;

// ── Lifecycle errors ──────────────────────────────────────────────────────────

/// A failed lifecycle step. The first one aborts the rest of the pipeline.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error(
        "This command must be run as root (effective uid is {uid}). \
         Try: sudo asus-touchpad-installer {command}"
    )]
    Privilege { uid: u32, command: String },

    #[error("Failed to load kernel module '{module}'")]
    Module {
        module: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to {action}")]
    Fs {
        action: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to {action} {unit}")]
    Service {
        action: String,
        unit: String,
        #[source]
        source: anyhow::Error,
    },
}

impl InstallError {
    /// Process exit status for this error class.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Privilege { .. } => EXIT_PRIVILEGE,
            Self::Module { .. } => EXIT_MODULE,
            Self::Fs { .. } => EXIT_FS,
            Self::Service { .. } => EXIT_SERVICE,
        }
    }

    /// Wrap a filesystem failure.
    pub fn fs(action: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Fs {
            action: action.into(),
            source,
        }
    }

    /// Wrap a service-manager failure.
    pub fn service(action: impl Into<String>, unit: &str, source: anyhow::Error) -> Self {
        Self::Service {
            action: action.into(),
            unit: unit.to_string(),
            source,
        }
    }
}

/// Exit status for any error bubbling out of a command.
///
/// Errors that are (or wrap) an [`InstallError`] map to its class code;
/// anything else is [`EXIT_UNEXPECTED`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<InstallError>())
        .map_or(EXIT_UNEXPECTED, InstallError::exit_code)
}
