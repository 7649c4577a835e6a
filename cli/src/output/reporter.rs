//! `TerminalReporter`: the terminal side of `ProgressReporter`.

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Prints pipeline progress through an [`OutputContext`], so it honours
/// `--quiet` and the colour settings.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.ctx.step(message);
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}
