//! PATH lookup for required tools.
//!
//! Tools are resolved by walking the PATH entries directly rather than
//! shelling out to `which`, whose behavior varies across systems and which
//! is sometimes a shell builtin with inconsistent error handling.
//!
//! # Example
//!
//! ```no_run
//! use wte_tools::requirements::probe::{parse_system_path, resolve_tool_path};
//!
//! let path = parse_system_path();
//! if let Some(cmake) = resolve_tool_path("cmake", &path) {
//!     println!("cmake at {}", cmake.display());
//! }
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use std::thread;
use std::time::{Duration, Instant};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").expect("version regex is valid"));

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names to try for `tool` in a single PATH directory.
#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(tool.to_string())
        .chain(
            exts.split(';')
                .filter(|e| !e.is_empty())
                .map(|e| format!("{}{}", tool, e.to_lowercase())),
        )
        .collect()
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is a regular, executable file.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    path_entries
        .iter()
        .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Extract the first dotted version number from tool output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_RE.find(output).map(|m| m.as_str().to_string())
}

/// How long `--version` may run before the probe gives up.
pub const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run `<binary> --version` and extract its version number.
///
/// Any failure (spawn error, non-zero exit, timeout, no version in output)
/// is `None`.
pub fn probe_version(binary: &Path) -> Option<String> {
    probe_version_within(binary, VERSION_PROBE_TIMEOUT)
}

/// [`probe_version`] with an explicit time limit. A tool still running at
/// the deadline is killed.
///
/// Output is read after the tool exits, so a tool that writes more than a
/// pipe buffer of version text runs into the deadline.
pub fn probe_version_within(binary: &Path, timeout: Duration) -> Option<String> {
    let mut child = Command::new(binary)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .ok()?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) if Instant::now() < deadline => thread::sleep(POLL_INTERVAL),
            Ok(None) => {
                tracing::warn!(
                    "{} --version did not finish within {:?}",
                    binary.display(),
                    timeout
                );
                child.kill().ok();
                child.wait().ok();
                return None;
            }
            Err(e) => {
                tracing::debug!("Waiting on {} failed: {}", binary.display(), e);
                return None;
            }
        }
    }

    let output = child.wait_with_output().ok()?;
    if !output.status.success() {
        tracing::debug!(
            "{} --version exited with {:?}",
            binary.display(),
            output.status.code()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    extract_version(&stdout).or_else(|| extract_version(&stderr))
}
