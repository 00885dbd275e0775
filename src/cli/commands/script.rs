//! External script commands.
//!
//! `wte-tools syscheck` and `wte-tools configure` run the configured shell
//! command from the tools root and report whether it passed.

use crate::config::{ExternalScript, ToolsConfig};
use crate::error::Result;
use crate::shell::run_script;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs one of the external helper scripts.
pub struct ScriptCommand<'a> {
    config: &'a ToolsConfig,
    script: ExternalScript,
}

impl<'a> ScriptCommand<'a> {
    /// Create a command for `script`.
    pub fn new(config: &'a ToolsConfig, script: ExternalScript) -> Self {
        Self { config, script }
    }

    /// Run the script, reporting progress to `ui`. Returns whether it passed.
    pub fn run(&self, ui: &mut dyn UserInterface) -> bool {
        let command = self.config.script_command(self.script);
        ui.message(&format!("Running {}: {}", self.script, command));

        let quiet = !ui.output_mode().shows_script_output();
        let passed = run_script(command, Some(&self.config.root), quiet);
        if passed {
            ui.success(&format!("The {} script completed", self.script));
        } else {
            ui.error(&format!("The {} script failed", self.script));
        }
        passed
    }
}

impl Command for ScriptCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.run(ui) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
