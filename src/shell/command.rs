//! Shell command execution.

use crate::error::{Result, ToolsError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout and stderr (if false, inherits from parent).
    pub capture: bool,
}

/// Execute a shell command and wait for it to exit.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag()).arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    tracing::debug!("Running `{}` via {}", command, shell);
    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn {}: {}", shell, e);
        ToolsError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let result = CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    };
    tracing::debug!(
        "`{}` exited with {:?} after {:?}",
        command,
        result.exit_code,
        result.duration
    );
    Ok(result)
}

/// Run an external script and report whether it passed.
///
/// Exit status 0 is `true`. Any other status, death by signal, or failure to
/// start the shell is `false`. With `quiet`, the script's output is captured
/// and discarded instead of going to the terminal.
pub fn run_script(command: &str, cwd: Option<&Path>, quiet: bool) -> bool {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        capture: quiet,
    };

    match execute(command, &options) {
        Ok(result) => result.success,
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lic` (interactive login shell) on Unix so that node version
/// managers activated in the user's rc files put `npm` on PATH. In CI,
/// uses `-lc` to avoid `cannot set terminal process group` errors from
/// `-i` without a TTY.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else if super::is_ci() {
        "-lc"
    } else {
        "-lic"
    }
}
