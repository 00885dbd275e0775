//! Override file discovery and loading.
//!
//! The built-in table covers a stock engine checkout. A `wte-tools.yml` in the
//! tools root can replace any part of it:
//!
//! ```yaml
//! required_tools: [cmake, git, ninja]
//! repositories:
//!   allegro: https://github.com/example/allegro5
//! settings_file: conf/settings.json
//! syscheck_command: ./scripts/syscheck.sh
//! config_command: ./scripts/configure.sh
//! ```

use crate::error::{Result, ToolsError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ToolsConfig;

/// File name of the optional override file.
pub const OVERRIDE_FILE: &str = "wte-tools.yml";

/// Optional overrides for [`ToolsConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Replaces the required tool list.
    #[serde(default)]
    pub required_tools: Option<Vec<String>>,

    /// Merged over the default repositories.
    #[serde(default)]
    pub repositories: BTreeMap<String, String>,

    /// Settings document location, relative to the tools root.
    #[serde(default)]
    pub settings_file: Option<PathBuf>,

    #[serde(default)]
    pub syscheck_command: Option<String>,

    #[serde(default)]
    pub config_command: Option<String>,
}

impl ConfigOverrides {
    /// Parse overrides from YAML text.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        // An empty file deserializes as null; treat it as no overrides.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ToolsError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate and apply the overrides to `config`.
    pub fn apply(self, config: &mut ToolsConfig) -> Result<()> {
        self.validate()?;

        if let Some(tools) = self.required_tools {
            config.required_tools = tools;
        }
        config.repositories.extend(self.repositories);
        if let Some(file) = self.settings_file {
            config.settings_path = config.root.join(file);
        }
        if let Some(cmd) = self.syscheck_command {
            config.syscheck_command = cmd;
        }
        if let Some(cmd) = self.config_command {
            config.config_command = cmd;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if let Some(tools) = &self.required_tools {
            if tools.iter().any(|t| t.trim().is_empty()) {
                return Err(ToolsError::ConfigValidationError {
                    message: "required_tools contains an empty name".to_string(),
                });
            }
        }

        for (name, url) in &self.repositories {
            if url.trim().is_empty() {
                return Err(ToolsError::ConfigValidationError {
                    message: format!("repository '{}' has no URL", name),
                });
            }
        }

        let commands = [
            ("syscheck_command", &self.syscheck_command),
            ("config_command", &self.config_command),
        ];
        for (key, cmd) in commands {
            if cmd.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(ToolsError::ConfigValidationError {
                    message: format!("{} must not be empty", key),
                });
            }
        }

        Ok(())
    }
}

/// Load `wte-tools.yml` from `root`, if it exists.
pub fn load_overrides(root: &Path) -> Result<Option<ConfigOverrides>> {
    let path = root.join(OVERRIDE_FILE);
    if !path.exists() {
        return Ok(None);
    }

    tracing::debug!("Loading tool config overrides from {}", path.display());
    let content = fs::read_to_string(&path)?;
    ConfigOverrides::parse(&content, &path).map(Some)
}
