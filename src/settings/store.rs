//! Settings document storage.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ToolsConfig;
use crate::error::{Result, ToolsError};

use super::{check_access, merge_settings};

/// The settings document: an untyped JSON object.
pub type SettingsDocument = Map<String, Value>;

/// Loads and saves the settings document at a fixed path.
///
/// There is no locking; a single writer is assumed.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for the configured settings path.
    pub fn from_config(config: &ToolsConfig) -> Self {
        Self::new(&config.settings_path)
    }

    /// Path of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check permissions on the settings file. See [`check_access`].
    pub fn check_access(&self, flags: Option<&str>) -> Result<()> {
        check_access(&self.path, flags)
    }

    /// Load the saved settings.
    ///
    /// Returns `None` when there are no usable settings: the file is missing,
    /// unreadable, not valid JSON, or not a JSON object.
    pub fn load(&self) -> Option<SettingsDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No settings at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(settings)) => Some(settings),
            Ok(_) => {
                tracing::warn!(
                    "Ignoring settings at {}: not an object",
                    self.path.display()
                );
                None
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Merge `settings` into the saved document and write it out.
    ///
    /// `settings` must be a JSON object; anything else fails before the file
    /// is touched. Returns the document that was written.
    pub fn save(&self, settings: Value) -> Result<SettingsDocument> {
        let Value::Object(settings) = settings else {
            return Err(ToolsError::InvalidSettings);
        };

        let document = match self.load() {
            Some(saved) => merge_settings(saved, settings),
            None => settings,
        };

        let content =
            serde_json::to_string(&document).map_err(|e| ToolsError::Other(e.into()))?;
        self.write(&content)?;

        tracing::debug!("Saved {} settings to {}", document.len(), self.path.display());
        Ok(document)
    }

    fn write(&self, content: &str) -> Result<()> {
        let write_err = |source: std::io::Error| ToolsError::SettingsWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, content).map_err(write_err)
    }
}
