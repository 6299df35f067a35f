use std::io::IsTerminal;

use colored::{Color, Colorize};

/// Colour decisions for terminal output.
#[derive(Debug, Clone)]
pub struct UiStyle {
    pub use_color: bool,
    pub color_header: Color,
    pub color_success: Color,
    pub color_muted: Color,
}

impl UiStyle {
    /// Colour is used only on a terminal, without `NO_COLOR`, and when enabled in config.
    pub fn detect(color_enabled: bool) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::with_color(stdout_tty && color_enabled && !no_color)
    }

    pub fn with_color(use_color: bool) -> Self {
        Self {
            use_color,
            color_header: Color::BrightBlue,
            color_success: Color::Green,
            color_muted: Color::BrightBlack,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        "─".repeat(width.max(40))
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_header).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn apply_success_style(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_success).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn apply_muted_style(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_muted).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_leaves_text_untouched() {
        let style = UiStyle::with_color(false);

        assert_eq!(style.apply_header_style("Budgets"), "Budgets");
        assert_eq!(style.apply_muted_style("(deleted)"), "(deleted)");
        assert_eq!(style.horizontal_line(3).chars().count(), 40);
    }
}
