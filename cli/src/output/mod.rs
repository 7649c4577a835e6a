//! Terminal output for the installer commands.
//!
//! Progress goes to stdout and is silenced by `--quiet`. Errors go to stderr
//! and are always shown.

pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::{OwoColorize as _, Style};
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Styling and verbosity shared by every command.
pub struct OutputContext {
    pub styles: Styles,
    /// Suppress everything except errors.
    pub quiet: bool,
}

impl OutputContext {
    /// Colours are used only on a terminal, without `--no-color` and without
    /// `NO_COLOR` in the environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let colour = !no_color && Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();
        let styles = if colour {
            Styles::coloured()
        } else {
            Styles::default()
        };
        Self { styles, quiet }
    }

    fn line(&self, mark: &str, style: Style, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", mark.style(style));
        }
    }

    /// `→ msg`
    pub fn step(&self, msg: &str) {
        self.line("→", self.styles.step, msg);
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) {
        self.line("✓", self.styles.done, msg);
    }

    /// `! msg`
    pub fn warn(&self, msg: &str) {
        self.line("!", self.styles.caution, msg);
    }

    /// `ℹ msg`
    pub fn note(&self, msg: &str) {
        self.line("ℹ", self.styles.note, msg);
    }

    /// `✗ msg` on stderr, shown even when quiet.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.failure));
    }

    /// Bold heading printed before a command's steps.
    pub fn title(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.style(self.styles.title));
        }
    }

    /// One row of the status table: dimmed label, value coloured by whether
    /// the fact holds.
    pub fn fact(&self, label: &str, value: &str, holds: bool) {
        if !self.quiet {
            println!(
                "  {:<24} {}",
                label.style(self.styles.label),
                value.style(self.styles.fact(holds))
            );
        }
    }
}
