//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! returns plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for banners and section headers
    pub fn header<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.bold()))
    }

    /// Style for primary values (e.g., target language, model name)
    pub fn value<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., endpoints, token counts)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.yellow()))
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed().italic()))
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed()))
    }
}

fn paint<T: Display>(text: &T, colored: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        colored(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_text_keeps_content() {
        assert!(Style::error("Error:").contains("Error:"));
        assert!(Style::value("Spanish").contains("Spanish"));
        assert!(Style::secondary(42).contains("42"));
    }
}
