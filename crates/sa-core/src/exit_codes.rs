//! Exit codes for the analyze-series CLI.
//!
//! Exit codes communicate the outcome of a run without requiring output
//! parsing. They are a stable contract for automation: scripts gate on
//! the assertion status, so changes require a major version bump.
//!
//! The I/O code follows the sysexits.h convention (EX_IOERR = 74).

/// Exit codes for analyze-series operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: report printed, no assertion failure
    Success = 0,

    /// Assertion requested and failed (last point out of control)
    AssertionFailed = 1,

    /// Input could not be read (I/O failure)
    IoError = 74,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Get the code name as a string constant (for diagnostics).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Success => "OK",
            ExitCode::AssertionFailed => "ERR_ASSERTION",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
