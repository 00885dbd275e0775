//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`wte-tools check`, `wte-tools settings`)
//! - Shared configuration loaded once in `main`
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod repos;
pub mod script;
pub mod settings;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
