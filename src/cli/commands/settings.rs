//! Settings command implementation.
//!
//! `wte-tools settings` exposes the settings store: print the document,
//! merge new values into it, check file permissions, or print its path.

use serde_json::Value;

use crate::cli::args::SettingsCommands;
use crate::config::ToolsConfig;
use crate::error::{Result, ToolsError};
use crate::settings::SettingsStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The settings command implementation.
pub struct SettingsCommand {
    store: SettingsStore,
    action: SettingsCommands,
}

impl SettingsCommand {
    /// Create a new settings command for the configured settings file.
    pub fn new(config: &ToolsConfig, action: SettingsCommands) -> Self {
        Self {
            store: SettingsStore::from_config(config),
            action,
        }
    }

    fn show(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(settings) = self.store.load() else {
            ui.warning(&format!("No settings found at {}", self.store.path().display()));
            return Ok(CommandResult::failure(1));
        };

        let json =
            serde_json::to_string_pretty(&settings).map_err(|e| ToolsError::Other(e.into()))?;
        ui.message(&json);
        Ok(CommandResult::success())
    }

    fn set(&self, json: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            tracing::debug!("Rejecting settings input: {}", e);
            ToolsError::InvalidSettings
        })?;

        self.store.save(value)?;
        ui.success("Settings saved");
        Ok(CommandResult::success())
    }

    fn access(&self, flags: Option<&str>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.store.check_access(flags)?;
        ui.success(&format!(
            "Settings file {} passed access checks",
            self.store.path().display()
        ));
        Ok(CommandResult::success())
    }
}

impl Command for SettingsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.action {
            SettingsCommands::Show => self.show(ui),
            SettingsCommands::Set { json } => self.set(json, ui),
            SettingsCommands::Access { flags } => self.access(flags.as_deref(), ui),
            SettingsCommands::Path => {
                ui.message(&self.store.path().display().to_string());
                Ok(CommandResult::success())
            }
        }
    }
}
