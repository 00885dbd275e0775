//! Tool configuration for wte-tools.
//!
//! [`ToolsConfig`] holds everything the helpers need to know about the
//! environment they set up: which executables must be installed, where the
//! engine's dependencies are fetched from, where settings live and which
//! external scripts to run. It is built once at startup and passed around by
//! reference.
//!
//! - Defaults in [`ToolsConfig::defaults`]
//! - Override file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use wte_tools::config::{ExternalScript, ToolsConfig};
//!
//! let config = ToolsConfig::defaults(Path::new("/opt/wtengine-tools"));
//! assert_eq!(config.required_tools, vec!["cmake", "git"]);
//! assert_eq!(config.script_command(ExternalScript::SystemCheck), "npm run wte-syscheck");
//! assert!(config.settings_path.ends_with("settings.json"));
//! ```

pub mod loader;

pub use loader::{load_overrides, ConfigOverrides, OVERRIDE_FILE};

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the settings document inside the tools root.
pub const SETTINGS_FILE: &str = "settings.json";

/// Executables that must resolve on PATH before building the engine.
pub const DEFAULT_REQUIRED_TOOLS: &[&str] = &["cmake", "git"];

/// Source repositories for the engine's third-party libraries.
pub const DEFAULT_REPOSITORIES: &[(&str, &str)] = &[
    ("allegro", "https://github.com/liballeg/allegro5"),
    ("physfs", "https://github.com/icculus/physfs"),
];

pub const DEFAULT_SYSCHECK_COMMAND: &str = "npm run wte-syscheck";
pub const DEFAULT_CONFIG_COMMAND: &str = "npm run wte-config";

/// Tools root: `explicit` (`--root` / `WTE_TOOLS_ROOT`), else the current
/// directory. An unusable current directory is an error.
pub fn resolve_root(explicit: Option<&Path>) -> crate::error::Result<PathBuf> {
    resolve_root_with(explicit, std::env::current_dir)
}

fn resolve_root_with(
    explicit: Option<&Path>,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> crate::error::Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(current_dir()?),
    }
}

/// The two external helper scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalScript {
    /// Verifies the host can build the engine.
    SystemCheck,
    /// Configures the engine build.
    Configure,
}

impl ExternalScript {
    /// Human-readable label used in output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SystemCheck => "system check",
            Self::Configure => "configuration",
        }
    }
}

impl fmt::Display for ExternalScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable configuration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Directory the tools are installed in.
    pub root: PathBuf,
    /// Executables checked by the environment validator, in order.
    pub required_tools: Vec<String>,
    /// Named source repository URLs.
    pub repositories: BTreeMap<String, String>,
    /// Location of the settings document.
    pub settings_path: PathBuf,
    /// Shell command for the system-check script.
    pub syscheck_command: String,
    /// Shell command for the configuration script.
    pub config_command: String,
}

impl ToolsConfig {
    /// Built-in configuration rooted at `root`.
    pub fn defaults(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            required_tools: DEFAULT_REQUIRED_TOOLS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            repositories: DEFAULT_REPOSITORIES
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
            settings_path: root.join(SETTINGS_FILE),
            syscheck_command: DEFAULT_SYSCHECK_COMMAND.to_string(),
            config_command: DEFAULT_CONFIG_COMMAND.to_string(),
        }
    }

    /// Load the configuration for `root`, applying `wte-tools.yml` if present.
    pub fn load(root: &Path) -> crate::error::Result<Self> {
        let mut config = Self::defaults(root);
        if let Some(overrides) = load_overrides(root)? {
            overrides.apply(&mut config)?;
        }
        Ok(config)
    }

    /// Replace the settings path (from `--settings` or `WTE_SETTINGS`).
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        };
        self
    }

    /// The shell command for an external script.
    pub fn script_command(&self, script: ExternalScript) -> &str {
        match script {
            ExternalScript::SystemCheck => &self.syscheck_command,
            ExternalScript::Configure => &self.config_command,
        }
    }

    /// Look up a repository URL by name.
    pub fn repository(&self, name: &str) -> Option<&str> {
        self.repositories.get(name).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolsError;

    #[test]
    fn explicit_root_wins() {
        let root = resolve_root_with(Some(Path::new("/opt/wte")), || {
            panic!("current dir must not be consulted")
        })
        .unwrap();
        assert_eq!(root, Path::new("/opt/wte"));
    }

    #[test]
    fn falls_back_to_current_dir() {
        let root = resolve_root_with(None, || Ok(PathBuf::from("/work"))).unwrap();
        assert_eq!(root, Path::new("/work"));
    }

    #[test]
    fn deleted_current_dir_is_an_error() {
        let err = resolve_root_with(None, || {
            Err(io::Error::new(io::ErrorKind::NotFound, "cwd removed"))
        })
        .unwrap_err();
        assert!(matches!(err, ToolsError::Io(_)));
        assert!(err.fatal_message().contains("cwd removed"));
    }

    #[test]
    fn defaults_match_engine_requirements() {
        let config = ToolsConfig::defaults(Path::new("/tools"));
        assert_eq!(config.required_tools, vec!["cmake", "git"]);
        assert_eq!(config.settings_path, PathBuf::from("/tools/settings.json"));
        assert_eq!(config.repositories.len(), 2);
    }

    #[test]
    fn repository_lookup() {
        let config = ToolsConfig::defaults(Path::new("/tools"));
        assert_eq!(
            config.repository("allegro"),
            Some("https://github.com/liballeg/allegro5")
        );
        assert_eq!(
            config.repository("physfs"),
            Some("https://github.com/icculus/physfs")
        );
        assert!(config.repository("sdl").is_none());
    }

    #[test]
    fn script_commands() {
        let config = ToolsConfig::defaults(Path::new("/tools"));
        assert_eq!(
            config.script_command(ExternalScript::SystemCheck),
            "npm run wte-syscheck"
        );
        assert_eq!(
            config.script_command(ExternalScript::Configure),
            "npm run wte-config"
        );
    }

    #[test]
    fn relative_settings_path_joins_root() {
        let config = ToolsConfig::defaults(Path::new("/tools"))
            .with_settings_path(PathBuf::from("conf/engine.json"));
        assert_eq!(
            config.settings_path,
            PathBuf::from("/tools/conf/engine.json")
        );
    }

    #[test]
    fn absolute_settings_path_is_kept() {
        let config = ToolsConfig::defaults(Path::new("/tools"))
            .with_settings_path(PathBuf::from("/etc/wte/settings.json"));
        assert_eq!(
            config.settings_path,
            PathBuf::from("/etc/wte/settings.json")
        );
    }

    #[test]
    fn load_without_override_file_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = ToolsConfig::load(temp.path()).unwrap();
        assert_eq!(config, ToolsConfig::defaults(temp.path()));
    }

    #[test]
    fn script_labels() {
        assert_eq!(ExternalScript::SystemCheck.to_string(), "system check");
        assert_eq!(ExternalScript::Configure.to_string(), "configuration");
    }
}
