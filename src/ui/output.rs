//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including resolved tool paths.
    Verbose,
    /// Show progress, status and external script output.
    #[default]
    Normal,
    /// Show status only; external script output is swallowed.
    Quiet,
}

impl OutputMode {
    /// Mode selected by the `-v` / `-q` command-line flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows extra detail such as paths.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if external script output goes to the terminal.
    pub fn shows_script_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
