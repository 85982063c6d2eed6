//! crates/signature/src/generation.rs
//!
//! Signature generation from a base stream.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::strong::Xxh64;
use checksums::{RollingChecksum, RollingError};
use protocol::WireError;

use crate::chunk::ChunkSize;
use crate::source::ByteSource;
use crate::table::SignatureTable;

/// Errors returned when generating, persisting or loading signatures.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// Underlying I/O failure while reading the base stream or a signature file.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// The base stream is too short to produce a useful signature.
    #[error("base input of {len} byte(s) is shorter than two blocks of {chunk_size} bytes")]
    InsufficientLength {
        /// Length of the base stream in bytes.
        len: u64,
        /// Block size requested by the caller.
        chunk_size: ChunkSize,
    },
    /// A persisted signature could not be decoded.
    #[error("malformed signature data: {0}")]
    Malformed(#[source] WireError),
    /// The rolling checksum rejected a block.
    #[error(transparent)]
    Rolling(#[from] RollingError),
}

impl From<WireError> for SignatureError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::Io(inner) => Self::Io(inner),
            other => Self::Malformed(other),
        }
    }
}

/// Parameters for signature generation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SignatureOptions {
    chunk_size: ChunkSize,
    strong_digests: bool,
}

impl SignatureOptions {
    /// Options for blocks of `chunk_size` bytes without strong digests.
    #[must_use]
    pub const fn new(chunk_size: ChunkSize) -> Self {
        Self {
            chunk_size,
            strong_digests: false,
        }
    }

    /// Enables or disables recording a strong digest per block.
    #[must_use]
    pub const fn with_strong_digests(mut self, enabled: bool) -> Self {
        self.strong_digests = enabled;
        self
    }

    /// Block size in bytes.
    #[must_use]
    pub const fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    /// Whether strong digests are recorded.
    #[must_use]
    pub const fn strong_digests(&self) -> bool {
        self.strong_digests
    }
}

/// Builds the signature of `source`.
///
/// The stream is read in consecutive blocks of the configured size until it
/// is exhausted; the final block may be shorter and is still indexed.
///
/// # Errors
///
/// Propagates any I/O error raised by `source`.
#[cfg_attr(
    feature = "tracing",
    instrument(skip(source), fields(chunk_size = options.chunk_size().get()), name = "generate_signature")
)]
pub fn generate_signature<S: ByteSource + ?Sized>(
    source: &mut S,
    options: SignatureOptions,
) -> Result<SignatureTable, SignatureError> {
    let chunk_size = options.chunk_size();
    let mut table = if options.strong_digests() {
        SignatureTable::with_strong_digests(chunk_size)
    } else {
        SignatureTable::new(chunk_size)
    };

    let mut rolling = RollingChecksum::new(chunk_size.window_capacity());
    let mut buffer = vec![0u8; chunk_size.as_usize()];
    #[cfg(feature = "tracing")]
    let mut total_bytes: u64 = 0;

    loop {
        let read = source.read_up_to(&mut buffer)?;
        if read == 0 {
            break;
        }

        let block = &buffer[..read];
        rolling.init(block)?;
        let strong = options.strong_digests().then(|| Xxh64::digest(block));
        table.push_block(rolling.value(), strong);
        #[cfg(feature = "tracing")]
        {
            total_bytes = total_bytes.saturating_add(read as u64);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "rdiff::signature",
        blocks = table.block_count(),
        distinct = table.len(),
        total_bytes,
        "signature generated"
    );

    Ok(table)
}

/// Opens `path` and builds its signature.
///
/// # Errors
///
/// - [`SignatureError::Io`] when the file cannot be opened or read.
/// - [`SignatureError::InsufficientLength`] when the file holds fewer than two
///   full blocks.
pub fn generate_signature_file(
    path: &Path,
    options: SignatureOptions,
) -> Result<SignatureTable, SignatureError> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let chunk_size = options.chunk_size();
    if len / u64::from(chunk_size.get()) < 2 {
        return Err(SignatureError::InsufficientLength { len, chunk_size });
    }

    let mut reader = BufReader::new(file);
    generate_signature(&mut reader, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksums::RollingDigest;

    fn options(chunk: u32) -> SignatureOptions {
        SignatureOptions::new(ChunkSize::new(chunk).unwrap())
    }

    #[test]
    fn blocks_are_indexed_in_order() {
        let data = b"aaaabbbbcccc";
        let table = generate_signature(&mut &data[..], options(4)).expect("signature");

        assert_eq!(table.block_count(), 3);
        assert_eq!(table.get(RollingDigest::from_bytes(b"aaaa").value()), Some(0));
        assert_eq!(table.get(RollingDigest::from_bytes(b"bbbb").value()), Some(1));
        assert_eq!(table.get(RollingDigest::from_bytes(b"cccc").value()), Some(2));
    }

    #[test]
    fn short_final_block_is_kept() {
        let data = b"aaaabbbbcc";
        let table = generate_signature(&mut &data[..], options(4)).expect("signature");

        assert_eq!(table.block_count(), 3);
        assert_eq!(table.get(RollingDigest::from_bytes(b"cc").value()), Some(2));
    }

    #[test]
    fn empty_stream_yields_empty_table() {
        let table = generate_signature(&mut &b""[..], options(4)).expect("signature");
        assert!(table.is_empty());
        assert_eq!(table.block_count(), 0);
    }

    #[test]
    fn repeated_blocks_keep_last_index() {
        let data = b"abcdXXXXabcd";
        let table = generate_signature(&mut &data[..], options(4)).expect("signature");

        assert_eq!(table.block_count(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(RollingDigest::from_bytes(b"abcd").value()), Some(2));
    }

    #[test]
    fn strong_digests_follow_blocks() {
        let data = b"abcdefgh";
        let table = generate_signature(&mut &data[..], options(4).with_strong_digests(true))
            .expect("signature");

        assert_eq!(table.strong_digest(0), Some(Xxh64::digest(b"abcd")));
        assert_eq!(table.strong_digest(1), Some(Xxh64::digest(b"efgh")));
    }

    #[test]
    fn read_errors_propagate() {
        struct Failing;
        impl io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let mut reader = BufReader::new(Failing);
        let err = generate_signature(&mut reader, options(4)).unwrap_err();
        assert!(matches!(err, SignatureError::Io(_)));
    }

    #[test]
    fn wire_io_errors_stay_io() {
        let err: SignatureError = WireError::Io(io::Error::other("gone")).into();
        assert!(matches!(err, SignatureError::Io(_)));

        let err: SignatureError = WireError::Truncated.into();
        assert!(matches!(err, SignatureError::Malformed(WireError::Truncated)));
    }
}
