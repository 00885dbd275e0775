//! Setup command implementation.
//!
//! `wte-tools setup` walks through the whole environment setup: check the
//! required tools, then offer to run the system check and the build
//! configuration, stopping at the first script that fails.

use crate::cli::args::SetupArgs;
use crate::config::{ExternalScript, ToolsConfig};
use crate::error::Result;
use crate::requirements::ToolChecker;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::script::ScriptCommand;

/// Scripts offered by setup, in order, with their prompt keys.
const STEPS: &[(&str, &str, ExternalScript)] = &[
    ("syscheck", "Run the system check?", ExternalScript::SystemCheck),
    ("configure", "Run the build configuration?", ExternalScript::Configure),
];

/// The setup command implementation.
pub struct SetupCommand<'a> {
    config: &'a ToolsConfig,
    args: SetupArgs,
}

impl<'a> SetupCommand<'a> {
    /// Create a new setup command.
    pub fn new(config: &'a ToolsConfig, args: SetupArgs) -> Self {
        Self { config, args }
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("WTEngine setup");

        ToolChecker::new(self.config).check_all(ui)?;

        for (key, question, script) in STEPS {
            let prompt = Prompt::new(key, question, true);
            let run = if self.args.yes {
                prompt.default
            } else {
                ui.confirm(&prompt)?
            };

            if !run {
                ui.message(&format!("Skipping {}", script));
                continue;
            }

            if !ScriptCommand::new(self.config, *script).run(ui) {
                return Ok(CommandResult::failure(1));
            }
        }

        ui.success("Setup complete!");
        Ok(CommandResult::success())
    }
}
