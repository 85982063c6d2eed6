//! crates/cli/src/exit_code.rs
//!
//! Process exit codes reported by the `rdiff` binary.

use std::fmt;

/// Exit codes returned by `rdiff` invocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,

    /// Invalid or missing command-line arguments.
    Usage = 1,

    /// An input could not be opened or read, or an output could not be
    /// written.
    Io = 2,

    /// The base file holds fewer than two full blocks.
    InsufficientLength = 3,

    /// A signature or delta file exists but is corrupt.
    Malformed = 4,

    /// The requested block size differs from the signature's.
    ChunkSizeMismatch = 5,
}

impl ExitCode {
    /// Numeric process status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short description of the condition.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Usage => "usage error",
            Self::Io => "I/O error",
            Self::InsufficientLength => "input too short",
            Self::Malformed => "malformed data file",
            Self::ChunkSizeMismatch => "chunk size mismatch",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
