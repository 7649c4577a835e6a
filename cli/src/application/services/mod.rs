//! Application services: use-case orchestration.
//!
//! Each service module implements one lifecycle step (or composes them into a
//! pipeline) by calling port traits. Services import only from `crate::domain`
//! and `crate::application::ports`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod deploy;
pub mod lifecycle;
pub mod module;
pub mod privilege;
pub mod registrar;
pub mod status;
