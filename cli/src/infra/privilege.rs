//! Effective-uid probe backed by `geteuid(2)`.

use crate::application::ports::PrivilegeProbe;

/// Reads the effective uid of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct EffectiveUser;

impl PrivilegeProbe for EffectiveUser {
    fn effective_uid(&self) -> u32 {
        nix::unistd::geteuid().as_raw()
    }
}
