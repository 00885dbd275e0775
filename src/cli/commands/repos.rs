//! Repos command implementation.
//!
//! `wte-tools repos` lists the named source repositories the engine's
//! dependencies are cloned from.

use crate::cli::args::ReposArgs;
use crate::config::ToolsConfig;
use crate::error::{Result, ToolsError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The repos command implementation.
pub struct ReposCommand<'a> {
    config: &'a ToolsConfig,
    args: ReposArgs,
}

impl<'a> ReposCommand<'a> {
    /// Create a new repos command.
    pub fn new(config: &'a ToolsConfig, args: ReposArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ReposCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let repositories = &self.config.repositories;

        if self.args.json {
            let json = serde_json::to_string_pretty(repositories)
                .map_err(|e| ToolsError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if repositories.is_empty() {
            ui.message("No repositories configured");
            return Ok(CommandResult::success());
        }

        let width = repositories.keys().map(|k| k.len()).max().unwrap_or(0);
        for (name, url) in repositories {
            ui.message(&format!("{:<width$}  {}", name, url, width = width));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::Path;

    #[test]
    fn lists_default_repositories_by_name() {
        let config = ToolsConfig::defaults(Path::new("/tools"));
        let mut ui = MockUI::new();

        ReposCommand::new(&config, ReposArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.messages(),
            [
                "allegro  https://github.com/liballeg/allegro5",
                "physfs   https://github.com/icculus/physfs",
            ]
        );
    }

    #[test]
    fn json_output_is_an_object() {
        let config = ToolsConfig::defaults(Path::new("/tools"));
        let mut ui = MockUI::new();

        ReposCommand::new(&config, ReposArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed["physfs"], "https://github.com/icculus/physfs");
    }

    #[test]
    fn empty_table_says_so() {
        let mut config = ToolsConfig::defaults(Path::new("/tools"));
        config.repositories.clear();
        let mut ui = MockUI::new();

        ReposCommand::new(&config, ReposArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("No repositories configured"));
    }
}
