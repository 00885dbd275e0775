//! Check command implementation.
//!
//! The `wte-tools check` command verifies that every required tool resolves
//! on PATH. It is also what runs when no subcommand is given.

use crate::cli::args::CheckArgs;
use crate::config::ToolsConfig;
use crate::error::Result;
use crate::requirements::ToolChecker;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    config: &'a ToolsConfig,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(config: &'a ToolsConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let found = ToolChecker::new(self.config)
            .probe_versions(self.args.versions)
            .check_all(ui)?;
        tracing::debug!("{} required tools found", found.len());
        Ok(CommandResult::success())
    }
}
