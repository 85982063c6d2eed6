//! crates/cli/src/error.rs
//!
//! Failures of a subcommand, with the file they concern.

use std::io;
use std::path::PathBuf;

use matching::DeltaError;
use signature::SignatureError;
use thiserror::Error;

use crate::exit_code::ExitCode;

/// Error raised while executing a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the base file or building its signature failed.
    #[error("cannot generate signature of {}: {source}", path.display())]
    GenerateSignature {
        /// Base file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: SignatureError,
    },
    /// A signature file could not be read.
    #[error("cannot read signature {}: {source}", path.display())]
    ReadSignature {
        /// Signature file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: SignatureError,
    },
    /// A signature file could not be written.
    #[error("cannot write signature {}: {source}", path.display())]
    WriteSignature {
        /// Output file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: SignatureError,
    },
    /// Reading the modified file or scanning it failed.
    #[error("cannot generate delta of {}: {source}", path.display())]
    GenerateDelta {
        /// Modified file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: DeltaError,
    },
    /// A delta file could not be read.
    #[error("cannot read delta {}: {source}", path.display())]
    ReadDelta {
        /// Delta file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: DeltaError,
    },
    /// A delta file could not be written.
    #[error("cannot write delta {}: {source}", path.display())]
    WriteDelta {
        /// Output file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: DeltaError,
    },
    /// Standard output rejected a write.
    #[error("cannot write to standard output: {0}")]
    Stdout(#[from] io::Error),
}

impl CliError {
    /// Exit code reported for this failure.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::GenerateSignature { source, .. }
            | Self::ReadSignature { source, .. }
            | Self::WriteSignature { source, .. } => signature_exit_code(source),
            Self::GenerateDelta { source, .. }
            | Self::ReadDelta { source, .. }
            | Self::WriteDelta { source, .. } => delta_exit_code(source),
            Self::Stdout(_) => ExitCode::Io,
        }
    }
}

const fn signature_exit_code(error: &SignatureError) -> ExitCode {
    match error {
        SignatureError::Io(_) | SignatureError::Rolling(_) => ExitCode::Io,
        SignatureError::InsufficientLength { .. } => ExitCode::InsufficientLength,
        SignatureError::Malformed(_) => ExitCode::Malformed,
    }
}

const fn delta_exit_code(error: &DeltaError) -> ExitCode {
    match error {
        DeltaError::Io(_) | DeltaError::Rolling(_) => ExitCode::Io,
        DeltaError::Malformed(_) => ExitCode::Malformed,
        DeltaError::ChunkSizeMismatch { .. } => ExitCode::ChunkSizeMismatch,
    }
}
