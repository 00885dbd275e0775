//! Permission checks on the settings file.
//!
//! Callers ask for checks with an `rwx`-style string. Passing nothing checks
//! that the file exists. Checks run one at a time and the first failure is
//! returned with the OS error attached.

use std::io;
use std::path::Path;

use crate::error::{Result, ToolsError};

/// A single filesystem access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessCheck {
    Exists,
    Read,
    Write,
    Execute,
}

impl AccessCheck {
    /// Label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exists => "existence",
            Self::Read => "read",
            Self::Write => "write",
            Self::Execute => "execute",
        }
    }

    #[cfg(unix)]
    fn mode(&self) -> libc::c_int {
        match self {
            Self::Exists => libc::F_OK,
            Self::Read => libc::R_OK,
            Self::Write => libc::W_OK,
            Self::Execute => libc::X_OK,
        }
    }
}

/// Translate permission letters into access checks.
///
/// `None` yields an existence check. Letters are case-insensitive and
/// anything other than `r`, `w` or `x` is ignored. Checks come back in
/// read, write, execute order regardless of input order.
pub fn parse_access_flags(flags: Option<&str>) -> Result<Vec<AccessCheck>> {
    let Some(flags) = flags else {
        return Ok(vec![AccessCheck::Exists]);
    };

    let flags = flags.to_lowercase();
    let checks: Vec<AccessCheck> = [
        ('r', AccessCheck::Read),
        ('w', AccessCheck::Write),
        ('x', AccessCheck::Execute),
    ]
    .into_iter()
    .filter(|(letter, _)| flags.contains(*letter))
    .map(|(_, check)| check)
    .collect();

    if checks.is_empty() {
        return Err(ToolsError::NoAccessChecks);
    }
    Ok(checks)
}

/// Run the requested checks against `path`.
pub fn check_access(path: &Path, flags: Option<&str>) -> Result<()> {
    for check in parse_access_flags(flags)? {
        tracing::debug!("Checking {} access on {}", check.label(), path.display());
        access(path, check).map_err(|source| ToolsError::SettingsAccess {
            path: path.to_path_buf(),
            check: check.label(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(unix)]
fn access(path: &Path, check: AccessCheck) -> io::Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    let rc = unsafe { libc::access(c_path.as_ptr(), check.mode()) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Without access(2), approximate the checks from metadata.
#[cfg(not(unix))]
fn access(path: &Path, check: AccessCheck) -> io::Result<()> {
    let metadata = path.metadata()?;
    match check {
        AccessCheck::Exists | AccessCheck::Execute => Ok(()),
        AccessCheck::Read => std::fs::File::open(path).map(|_| ()),
        AccessCheck::Write if metadata.permissions().readonly() => Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )),
        AccessCheck::Write => Ok(()),
    }
}
