//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// wte-tools - WTEngine build environment helper.
#[derive(Debug, Parser)]
#[command(name = "wte-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tools install location (defaults to the current directory)
    #[arg(short, long, global = true, env = "WTE_TOOLS_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to the settings file (relative paths resolve against the root)
    #[arg(short, long, global = true, env = "WTE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether prompts must be answered without a terminal.
    pub fn assume_yes(&self) -> bool {
        matches!(&self.command, Some(Commands::Setup(args)) if args.yes)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that required tools are installed (default if no command specified)
    Check(CheckArgs),

    /// Run the system-check script
    Syscheck,

    /// Run the configuration script
    Configure,

    /// Check tools, then run the system check and configuration
    Setup(SetupArgs),

    /// Read, write and check the settings file
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// List the engine's source repositories
    Repos(ReposArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Also report each tool's version
    #[arg(long)]
    pub versions: bool,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Answer every prompt with its default, no prompts
    #[arg(short, long)]
    pub yes: bool,
}

/// Settings subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SettingsCommands {
    /// Print the settings document
    Show,

    /// Merge a JSON object into the settings document
    Set {
        /// JSON object to save
        json: String,
    },

    /// Check settings file permissions
    Access {
        /// Permission letters to test: any of r, w, x (existence only if omitted)
        flags: Option<String>,
    },

    /// Print the settings file path
    Path,
}

/// Arguments for the `repos` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReposArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
