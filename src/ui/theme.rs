//! Visual theme and styling.

use console::Style;

/// Styles used in the report.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for section headers (bold).
    pub header: Style,
    /// Style for the underline below a header (dim).
    pub rule: Style,
    /// Style for progress and secondary text (dim).
    pub dim: Style,
    /// Style for the row of the user's current level (magenta bold).
    pub current: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold(),
            rule: Style::new().dim(),
            dim: Style::new().dim(),
            current: Style::new().magenta().bold(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            rule: Style::new(),
            dim: Style::new(),
            current: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme for stdout.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a section title underlined with `=` to its display width.
    pub fn format_section(&self, title: &str) -> String {
        let width = console::measure_text_width(title);
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.rule.apply_to("=".repeat(width))
        )
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
