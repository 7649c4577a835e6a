//! Domain layer: install layout, lifecycle errors and status types.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod layout;
pub mod status;

pub use error::{InstallError, exit_code_for};
pub use layout::InstallLayout;
pub use status::{InstallStatus, ServiceState};
