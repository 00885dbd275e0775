//! Visual theme and styling.

use console::Style;

/// Console color palette.
///
/// Errors are red, successes green, prompts and warnings yellow, headers
/// blue.
#[derive(Debug, Clone)]
pub struct WteTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages and prompt questions (yellow).
    pub warning: Style,
    /// Style for error messages (red).
    pub error: Style,
    /// Style for headers (blue bold).
    pub header: Style,
}

impl Default for WteTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl WteTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            header: Style::new().blue().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
