//! Application context: state shared by every command handler.

use crate::domain::InstallLayout;
use crate::infra::SystemHost;
use crate::infra::command_runner::TokioCommandRunner;
use crate::output::OutputContext;

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext`.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Host adapters (uid, modules, filesystem, systemd).
    pub host: SystemHost<TokioCommandRunner>,
    /// Fixed install targets.
    pub layout: InstallLayout,
}

impl AppContext {
    /// Construct an `AppContext` for the real host.
    #[must_use]
    pub fn new(output: OutputContext) -> Self {
        Self {
            output,
            host: SystemHost::default_runner(),
            layout: InstallLayout::system(),
        }
    }
}
