//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show per-file detail in addition to the summary.
    Verbose,
    /// Show status messages and the summary.
    #[default]
    Normal,
    /// Show nothing except errors and requested data.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-file detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
