//! crates/protocol/src/header.rs
//!
//! Magic and version prefix shared by every persisted file.

use std::io::{Read, Write};

use crate::error::WireError;

/// Current on-disk format version.
pub const FORMAT_VERSION: u8 = 1;

/// Kind of document stored in a persisted file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    /// Block checksum table of a base stream.
    Signature,
    /// Change records of a modified stream against a signature.
    Delta,
}

impl FileKind {
    /// Magic bytes written at the start of the file.
    #[must_use]
    pub const fn magic(self) -> [u8; 4] {
        match self {
            Self::Signature => *b"RDSG",
            Self::Delta => *b"RDDL",
        }
    }
}

/// Writes the magic and format version for `kind`.
pub fn write_header<W: Write + ?Sized>(writer: &mut W, kind: FileKind) -> Result<(), WireError> {
    writer.write_all(&kind.magic()).map_err(WireError::Io)?;
    writer.write_all(&[FORMAT_VERSION]).map_err(WireError::Io)?;
    Ok(())
}

/// Reads and validates the header written by [`write_header`].
pub fn read_header<R: Read + ?Sized>(reader: &mut R, kind: FileKind) -> Result<(), WireError> {
    let mut found = [0u8; 4];
    reader.read_exact(&mut found)?;
    if found != kind.magic() {
        return Err(WireError::BadMagic {
            expected: kind.magic(),
            found,
        });
    }

    let mut version = [0u8; 1];
    reader.read_exact(&mut version)?;
    if version[0] != FORMAT_VERSION {
        return Err(WireError::UnsupportedVersion(version[0]));
    }
    Ok(())
}
