//! Consistent color theme and styling for terminal output.

use comfy_table::Color;
use console::Style;
use owo_colors::OwoColorize;

/// Color theme for the help display.
///
/// Every style is forced on or off at construction so rendered output
/// depends only on the chosen color mode, never on what stdout happens
/// to be connected to.
#[derive(Debug, Clone)]
pub struct Theme {
    colored: bool,
    /// Large FIGlet banner
    pub banner: Style,
    /// Container name in the welcome box
    pub heading: Style,
    /// Values such as the OS base and highlighted commands
    pub highlight: Style,
    /// Italic notes between and after tables
    pub note: Style,
    /// Table titles
    pub title: Style,
}

impl Theme {
    pub fn new(colored: bool) -> Self {
        let forced = |style: Style| style.force_styling(colored);
        Self {
            colored,
            banner: forced(Style::new().cyan()),
            heading: forced(Style::new().green()),
            highlight: forced(Style::new().cyan()),
            note: forced(Style::new().italic()),
            title: forced(Style::new().italic()),
        }
    }

    /// Theme with every style disabled.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Table column colors: names and commands.
    pub const NAME: Color = Color::Cyan;
    /// Table column colors: implementation language.
    pub const LANGUAGE: Color = Color::Magenta;
    /// Table column colors: purpose text.
    pub const PURPOSE: Color = Color::Green;

    /// Apply a style to text.
    pub fn apply<T: std::fmt::Display>(&self, style: &Style, text: T) -> String {
        style.apply_to(text).to_string()
    }

    /// Format an error message with X mark.
    pub fn error_with_icon(&self, text: &str) -> String {
        if self.colored {
            format!("{} {}", "✗".red(), text.bright_red())
        } else {
            format!("✗ {text}")
        }
    }

    /// Format a warning message with warning sign.
    pub fn warning_with_icon(&self, text: &str) -> String {
        if self.colored {
            format!("{} {}", "⚠".yellow(), text.bright_yellow())
        } else {
            format!("⚠ {text}")
        }
    }
}
