//! wte-tools - Build environment helper for the WTEngine game engine.
//!
//! wte-tools checks that the tools needed to build the engine are
//! installed, runs the engine's system-check and configuration scripts,
//! and keeps a small JSON settings document for the build scripts.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration table and override file loading
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Required tool detection
//! - [`settings`] - Settings document storage and access checks
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wte_tools::settings::SettingsStore;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = SettingsStore::new(dir.path().join("settings.json"));
//!
//! assert!(store.load().is_none());
//! store.save(json!({"theme": "dark"})).unwrap();
//! store.save(json!({"volume": 80})).unwrap();
//!
//! let settings = store.load().unwrap();
//! assert_eq!(settings["theme"], "dark");
//! assert_eq!(settings["volume"], 80);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod settings;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolsError};
