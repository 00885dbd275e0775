//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::{parse_answer, OutputMode, Prompt, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "WTE_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts never block: they are answered from `WTE_PROMPT_<KEY>` when set,
/// otherwise with the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(&self, prompt: &Prompt) -> bool {
        let env_key = format!(
            "{}{}",
            PROMPT_ENV_PREFIX,
            prompt.key.to_uppercase().replace('-', "_")
        );
        match self.env_overrides.get(&env_key) {
            Some(value) => parse_answer(value).unwrap_or_else(|| {
                tracing::warn!("Ignoring {}={:?}: expected yes or no", env_key, value);
                prompt.default
            }),
            None => prompt.default,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let answer = self.answer(prompt);
        println!("{} {}", prompt.question, if answer { "yes" } else { "no" });
        Ok(answer)
    }
}
