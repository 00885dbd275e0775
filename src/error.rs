//! Error types for wte-tools operations.
//!
//! This module defines [`ToolsError`], the error type returned by every
//! fallible operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected conditions (no settings file yet) are not errors; they are
//!   reported as `None` by the settings store
//! - Everything else is fatal and bubbles up to `main`, which prints
//!   [`ToolsError::fatal_message`] and exits with status 1
//! - Use `anyhow::Error` (via `ToolsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wte-tools operations.
#[derive(Debug, Error)]
pub enum ToolsError {
    /// An access check was requested but no valid permission letters were given.
    #[error("Unable to check settings file! No proper tests requested")]
    NoAccessChecks,

    /// The settings file failed a permission or existence check.
    #[error("Settings file {path} failed {check} check: {source}")]
    SettingsAccess {
        path: PathBuf,
        check: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Settings passed to save were not a JSON object.
    #[error("Settings format not valid")]
    InvalidSettings,

    /// Writing the settings file failed.
    #[error("Failed to write settings to {path}: {source}")]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required executable could not be found on PATH.
    #[error("'{tool}' not found")]
    MissingTool { tool: String },

    /// Failed to parse the tool configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolsError {
    /// The single line shown to the user before the process exits.
    pub fn fatal_message(&self) -> String {
        format!("Error: {}. Exiting...", self)
    }
}

/// Result type alias for wte-tools operations.
pub type Result<T> = std::result::Result<T, ToolsError>;
