//! Engine settings persistence.
//!
//! The settings document is a single JSON object stored at
//! [`ToolsConfig::settings_path`](crate::config::ToolsConfig). It has no
//! schema beyond "is an object"; the build tooling stores whatever it needs.
//!
//! - [`access`] - Permission checks on the settings file
//! - [`merger`] - Merging new settings into the saved document
//! - [`store`] - Loading and saving the document
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wte_tools::settings::SettingsStore;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let store = SettingsStore::new(temp.path().join("settings.json"));
//!
//! assert!(store.load().is_none());
//! store.save(json!({"theme": "dark"})).unwrap();
//! store.save(json!({"volume": 80})).unwrap();
//!
//! let settings = store.load().unwrap();
//! assert_eq!(settings["theme"], "dark");
//! assert_eq!(settings["volume"], 80);
//! ```

pub mod access;
pub mod merger;
pub mod store;

pub use access::{check_access, parse_access_flags, AccessCheck};
pub use merger::merge_settings;
pub use store::{SettingsDocument, SettingsStore};
