//! Interactive prompts.

use console::{style, Style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{Result, ToolsError};

use super::Prompt;

/// Convert dialoguer errors to ToolsError.
fn map_dialoguer_err(e: dialoguer::Error) -> ToolsError {
    ToolsError::Io(e.into())
}

/// Dialoguer theme with yellow questions and no `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        prompt_style: Style::new().for_stderr().yellow(),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on `term`.
///
/// The theme styles for stderr, so `term` should be `Term::stderr()`.
///
/// Blocks until the user answers; pressing enter picks `prompt.default`.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
