//! crates/protocol/src/error.rs
//!
//! Error type for decoding persisted signature and delta files.

use std::io;

use thiserror::Error;

/// Errors raised while encoding or decoding a persisted file.
#[derive(Debug, Error)]
pub enum WireError {
    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
    /// The file does not start with the expected magic bytes.
    #[error("unrecognised file magic {found:02x?}, expected {expected:02x?}")]
    BadMagic {
        /// Magic bytes required by the caller.
        expected: [u8; 4],
        /// Magic bytes actually present.
        found: [u8; 4],
    },
    /// The header carries a format version this build does not understand.
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),
    /// The input ended in the middle of a field.
    #[error("input ended before the document was complete")]
    Truncated,
    /// A field decoded to a value that cannot occur in a valid document.
    #[error("invalid field: {0}")]
    Invalid(String),
    /// Bytes remained after a complete document.
    #[error("unexpected trailing data after document")]
    TrailingData,
}

impl WireError {
    /// Reports whether the error describes corrupt content rather than an I/O failure.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Builds an [`Invalid`](Self::Invalid) error from a message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

impl From<io::Error> for WireError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => Self::Truncated,
            io::ErrorKind::InvalidData => Self::Invalid(error.to_string()),
            _ => Self::Io(error),
        }
    }
}
