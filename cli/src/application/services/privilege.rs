//! Privilege guard, the first step of every mutating pipeline.

use crate::application::ports::PrivilegeProbe;
use crate::domain::InstallError;

const ROOT_UID: u32 = 0;

/// Fail unless the process runs with an effective uid of 0.
///
/// `command` is the subcommand name, echoed back in the `sudo` hint.
///
/// # Errors
///
/// Returns [`InstallError::Privilege`] for any non-root identity.
pub fn check_privilege(probe: &impl PrivilegeProbe, command: &str) -> Result<(), InstallError> {
    let uid = probe.effective_uid();
    if uid == ROOT_UID {
        return Ok(());
    }
    Err(InstallError::Privilege {
        uid,
        command: command.to_string(),
    })
}
