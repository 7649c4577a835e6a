//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! effective-uid probe, the kernel module table, filesystem access and
//! systemd.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod assets;
pub mod command_runner;
pub mod fs;
pub mod host;
pub mod modprobe;
pub mod privilege;
pub mod systemd;

pub use host::SystemHost;
