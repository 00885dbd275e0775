//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{ExternalScript, ToolsConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    /// Fatal conditions are returned as errors instead.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ToolsConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the loaded configuration.
    pub fn new(config: ToolsConfig) -> Self {
        Self { config }
    }

    /// Get the configuration commands run against.
    pub fn config(&self) -> &ToolsConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Syscheck) => {
                super::script::ScriptCommand::new(&self.config, ExternalScript::SystemCheck)
                    .execute(ui)
            }
            Some(Commands::Configure) => {
                super::script::ScriptCommand::new(&self.config, ExternalScript::Configure)
                    .execute(ui)
            }
            Some(Commands::Setup(args)) => {
                super::setup::SetupCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Settings(sub)) => {
                super::settings::SettingsCommand::new(&self.config, sub.clone()).execute(ui)
            }
            Some(Commands::Repos(args)) => {
                super::repos::ReposCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                // Default to checking the required tools
                super::check::CheckCommand::new(&self.config, CheckArgs::default()).execute(ui)
            }
        }
    }
}
