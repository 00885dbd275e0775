//! Required tool checker.
//!
//! The `ToolChecker` walks the configured tool list in order, reporting each
//! tool as it is found and stopping at the first one that is missing.

use std::path::PathBuf;

use crate::config::ToolsConfig;
use crate::error::{Result, ToolsError};
use crate::ui::UserInterface;

use super::probe::{parse_system_path, probe_version, resolve_tool_path};

/// A required tool that was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheck {
    /// Tool name as configured.
    pub name: String,
    /// Resolved binary path.
    pub path: PathBuf,
    /// Version reported by `--version`, when probed.
    pub version: Option<String>,
}

/// Checks that required tools are installed.
pub struct ToolChecker<'a> {
    tools: &'a [String],
    path_entries: Vec<PathBuf>,
    probe_versions: bool,
}

impl<'a> ToolChecker<'a> {
    /// Create a checker for the configured tools using the system PATH.
    pub fn new(config: &'a ToolsConfig) -> Self {
        Self::with_path(&config.required_tools, parse_system_path())
    }

    /// Create a checker for `tools` against explicit PATH entries.
    pub fn with_path(tools: &'a [String], path_entries: Vec<PathBuf>) -> Self {
        Self {
            tools,
            path_entries,
            probe_versions: false,
        }
    }

    /// Also run `<tool> --version` for each tool found.
    pub fn probe_versions(mut self, enabled: bool) -> Self {
        self.probe_versions = enabled;
        self
    }

    /// Look up a single tool without reporting anything.
    pub fn check_one(&self, name: &str) -> Option<ToolCheck> {
        let path = resolve_tool_path(name, &self.path_entries)?;
        let version = if self.probe_versions {
            probe_version(&path)
        } else {
            None
        };
        Some(ToolCheck {
            name: name.to_string(),
            path,
            version,
        })
    }

    /// Check every configured tool, in order.
    ///
    /// Each tool is reported to `ui` as soon as it is found. The first
    /// missing tool stops the check with [`ToolsError::MissingTool`].
    pub fn check_all(&self, ui: &mut dyn UserInterface) -> Result<Vec<ToolCheck>> {
        ui.message("Checking for necessary applications...");

        let with_path = ui.output_mode().shows_details();
        let mut found = Vec::with_capacity(self.tools.len());
        for name in self.tools {
            let Some(check) = self.check_one(name) else {
                tracing::debug!(
                    "{} not found in {} PATH entries",
                    name,
                    self.path_entries.len()
                );
                return Err(ToolsError::MissingTool { tool: name.clone() });
            };

            tracing::debug!("{} resolved to {}", name, check.path.display());
            ui.success(&found_message(&check, with_path));
            found.push(check);
        }

        Ok(found)
    }
}

fn found_message(check: &ToolCheck, with_path: bool) -> String {
    let mut msg = format!("'{}' found", check.name);
    if let Some(version) = &check.version {
        msg.push_str(&format!(" ({})", version));
    }
    if with_path {
        msg.push_str(&format!(" at {}", check.path.display()));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[cfg(unix)]
    fn install(dir: &std::path::Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\necho 'tool version 1.2.3'\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn all_tools_found() {
        let bin = TempDir::new().unwrap();
        install(bin.path(), "cmake");
        install(bin.path(), "git");
        let names = tools(&["cmake", "git"]);
        let checker = ToolChecker::with_path(&names, vec![bin.path().to_path_buf()]);
        let mut ui = MockUI::new();

        let found = checker.check_all(&mut ui).unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "cmake");
        assert!(ui.has_message("Checking for necessary applications"));
        assert!(ui.has_success("'cmake' found"));
        assert!(ui.has_success("'git' found"));
    }

    #[cfg(unix)]
    #[test]
    fn first_missing_tool_stops_check() {
        let bin = TempDir::new().unwrap();
        install(bin.path(), "cmake");
        install(bin.path(), "git");
        let names = tools(&["cmake", "wte-missing-tool", "git"]);
        let checker = ToolChecker::with_path(&names, vec![bin.path().to_path_buf()]);
        let mut ui = MockUI::new();

        let err = checker.check_all(&mut ui).unwrap_err();

        assert!(matches!(
            err,
            ToolsError::MissingTool { ref tool } if tool == "wte-missing-tool"
        ));
        assert!(ui.has_success("'cmake' found"));
        // git comes after the missing tool and is never reported
        assert!(!ui.has_success("'git' found"));
    }

    #[test]
    fn empty_path_reports_first_tool() {
        let names = tools(&["cmake", "git"]);
        let checker = ToolChecker::with_path(&names, Vec::new());
        let mut ui = MockUI::new();

        let err = checker.check_all(&mut ui).unwrap_err();

        assert_eq!(err.to_string(), "'cmake' not found");
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn empty_tool_list_passes() {
        let names: Vec<String> = Vec::new();
        let checker = ToolChecker::with_path(&names, Vec::new());
        let mut ui = MockUI::new();

        assert!(checker.check_all(&mut ui).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn versions_are_probed_when_enabled() {
        let bin = TempDir::new().unwrap();
        install(bin.path(), "cmake");
        let names = tools(&["cmake"]);
        let checker =
            ToolChecker::with_path(&names, vec![bin.path().to_path_buf()]).probe_versions(true);
        let mut ui = MockUI::new();

        let found = checker.check_all(&mut ui).unwrap();

        assert_eq!(found[0].version.as_deref(), Some("1.2.3"));
        assert!(ui.has_success("'cmake' found (1.2.3)"));
    }

    #[cfg(unix)]
    #[test]
    fn verbose_mode_shows_paths() {
        let bin = TempDir::new().unwrap();
        let path = install(bin.path(), "git");
        let names = tools(&["git"]);
        let checker = ToolChecker::with_path(&names, vec![bin.path().to_path_buf()]);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        checker.check_all(&mut ui).unwrap();

        assert!(ui.has_success(&path.display().to_string()));
    }

    #[test]
    fn new_uses_configured_tools() {
        let config = ToolsConfig::defaults(std::path::Path::new("/tools"));
        let checker = ToolChecker::new(&config);
        assert_eq!(checker.tools, config.required_tools.as_slice());
    }
}
