//! Required tool detection.
//!
//! Building the engine needs a handful of executables on PATH. This module
//! finds them and reports the first one that is missing.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup and version probing
//! - [`checker`] - Checking the configured tool list

pub mod checker;
pub mod probe;

pub use checker::{ToolCheck, ToolChecker};
