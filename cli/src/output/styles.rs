//! Palette for installer output.

use owo_colors::Style;

/// How each kind of line is drawn. `Styles::default()` is plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Styles {
    /// Completed steps and facts that hold (green).
    pub done: Style,
    /// Warnings and facts that do not hold (yellow).
    pub caution: Style,
    /// Errors (red).
    pub failure: Style,
    /// In-progress steps (cyan).
    pub step: Style,
    /// Closing hints (blue).
    pub note: Style,
    /// Command titles.
    pub title: Style,
    /// Labels in the status table.
    pub label: Style,
}

impl Styles {
    /// Palette used on a colour terminal.
    #[must_use]
    pub fn coloured() -> Self {
        Self {
            done: Style::new().green(),
            caution: Style::new().yellow(),
            failure: Style::new().red(),
            step: Style::new().cyan(),
            note: Style::new().blue(),
            title: Style::new().bold(),
            label: Style::new().dimmed(),
        }
    }

    /// Style of a status value: `done` when the fact holds, else `caution`.
    #[must_use]
    pub fn fact(&self, holds: bool) -> Style {
        if holds { self.done } else { self.caution }
    }
}
