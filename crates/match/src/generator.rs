//! crates/match/src/generator.rs
//!
//! Rolling scan of a modified stream against a [`SignatureTable`].

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::strong::Xxh64;
use checksums::{RollingChecksum, RollingError};
use protocol::WireError;
use signature::{ByteSource, ChunkSize, SignatureTable};

use crate::record::{ChangeRecord, Delta};
use crate::span::{Span, SpanKind};

/// Errors returned while generating, persisting or loading deltas.
#[derive(Debug, Error)]
pub enum DeltaError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// A persisted delta could not be decoded.
    #[error("malformed delta data: {0}")]
    Malformed(#[source] WireError),
    /// The caller asked for a block size other than the one the signature
    /// was generated with.
    #[error("chunk size {requested} does not match signature chunk size {signature}")]
    ChunkSizeMismatch {
        /// Block size recorded in the signature.
        signature: ChunkSize,
        /// Block size supplied by the caller.
        requested: ChunkSize,
    },
    /// The rolling window contract was violated.
    #[error(transparent)]
    Rolling(#[from] RollingError),
}

impl From<WireError> for DeltaError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::Io(inner) => Self::Io(inner),
            other => Self::Malformed(other),
        }
    }
}

/// Parameters for delta generation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeltaOptions {
    chunk_size: Option<ChunkSize>,
    verify_strong: bool,
}

impl DeltaOptions {
    /// Default options: signature block size, weak matches accepted as-is.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: None,
            verify_strong: false,
        }
    }

    /// Requires the signature to have been generated with `chunk_size`.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: ChunkSize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Confirms weak checksum hits against the signature's strong digests.
    ///
    /// Has no effect when the signature carries no strong digests.
    #[must_use]
    pub const fn with_verify_strong(mut self, enabled: bool) -> Self {
        self.verify_strong = enabled;
        self
    }

    /// Block size the caller expects, if any.
    #[must_use]
    pub const fn chunk_size(&self) -> Option<ChunkSize> {
        self.chunk_size
    }

    /// Whether strong verification was requested.
    #[must_use]
    pub const fn verify_strong(&self) -> bool {
        self.verify_strong
    }
}

/// Whether the rolling window is still filling after a match (or the start of
/// the stream) or sliding one byte at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanPhase {
    /// Fewer than a block's worth of bytes since the last reset.
    Filling,
    /// The window slid past a miss and is refilled by every new byte.
    Scanning,
}

/// Generates deltas against a single signature.
#[derive(Clone, Copy, Debug)]
pub struct DeltaGenerator<'a> {
    signature: &'a SignatureTable,
    options: DeltaOptions,
}

impl<'a> DeltaGenerator<'a> {
    /// Creates a generator for `signature`.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::ChunkSizeMismatch`] when `options` names a block
    /// size that differs from the signature's.
    pub fn new(signature: &'a SignatureTable, options: DeltaOptions) -> Result<Self, DeltaError> {
        if let Some(requested) = options.chunk_size()
            && requested != signature.chunk_size()
        {
            return Err(DeltaError::ChunkSizeMismatch {
                signature: signature.chunk_size(),
                requested,
            });
        }
        Ok(Self { signature, options })
    }

    /// Block size used for the scan.
    #[must_use]
    pub const fn chunk_size(&self) -> ChunkSize {
        self.signature.chunk_size()
    }

    /// Scans `source` to the end and returns the pruned delta.
    #[cfg_attr(
        feature = "tracing",
        instrument(skip(self, source), fields(chunk_size = self.chunk_size().get()), name = "generate_delta")
    )]
    pub fn generate<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Delta, DeltaError> {
        let mut scan = Scan::new(self);

        while let Some(byte) = source.next_byte()? {
            scan.rolling.ingest(byte);
            if scan.rolling.is_full() {
                scan.attempt_match()?;
            }
        }

        // The final window may be short; it still gets one lookup unless it
        // is the remainder of a slide that already missed.
        if scan.phase == ScanPhase::Filling && !scan.rolling.is_empty() && !scan.rolling.is_full()
        {
            scan.attempt_match()?;
        }

        let mut delta = scan.finish();
        self.mark_deleted(&mut delta);
        delta.retain(|_, record| !record.is_unchanged());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "rdiff::delta",
            records = delta.len(),
            literal_bytes = delta.literal_bytes_total(),
            "delta generated"
        );
        Ok(delta)
    }

    fn mark_deleted(&self, delta: &mut Delta) {
        let chunk = self.chunk_size();
        for index in self.signature.indices() {
            if !delta.contains(index) {
                let span = Span::for_kind(SpanKind::Deleted { index }, chunk);
                delta.insert(index, ChangeRecord::deleted(span));
            }
        }
    }

    fn lookup(&self, rolling: &RollingChecksum) -> Option<u64> {
        let index = self.signature.get(rolling.value())?;
        if !self.options.verify_strong() {
            return Some(index);
        }
        match self.signature.strong_digest(index) {
            Some(expected) => {
                let (first, second) = rolling.window().as_slices();
                (Xxh64::digest_parts(first, second) == expected).then_some(index)
            }
            None => Some(index),
        }
    }
}

struct Scan<'g, 'a> {
    generator: &'g DeltaGenerator<'a>,
    rolling: RollingChecksum,
    pending: Vec<u8>,
    last_matched: Option<u64>,
    phase: ScanPhase,
    delta: Delta,
}

impl<'g, 'a> Scan<'g, 'a> {
    fn new(generator: &'g DeltaGenerator<'a>) -> Self {
        let chunk = generator.chunk_size();
        Self {
            generator,
            rolling: RollingChecksum::new(chunk.window_capacity()),
            pending: Vec::new(),
            last_matched: None,
            phase: ScanPhase::Filling,
            delta: Delta::new(chunk),
        }
    }

    fn attempt_match(&mut self) -> Result<(), RollingError> {
        if let Some(index) = self.generator.lookup(&self.rolling) {
            self.rolling.reset();
            let span = Span::for_kind(SpanKind::Matched { index }, self.generator.chunk_size());
            let literals = std::mem::take(&mut self.pending);
            self.delta.insert(index, ChangeRecord::literal(span, literals));
            self.last_matched = Some(index);
            self.phase = ScanPhase::Filling;

            #[cfg(feature = "tracing")]
            tracing::trace!(target: "rdiff::delta", index, "block matched");
        } else {
            let byte = self.rolling.eject()?;
            self.pending.push(byte);
            self.phase = ScanPhase::Scanning;
        }
        Ok(())
    }

    fn finish(mut self) -> Delta {
        if !self.pending.is_empty() {
            self.pending.extend(self.rolling.window().iter());
            let kind = SpanKind::Trailing {
                last_matched: self.last_matched,
            };
            let span = Span::for_kind(kind, self.generator.chunk_size());
            self.delta.insert(
                Span::record_index(kind),
                ChangeRecord::literal(span, self.pending),
            );
        }
        self.delta
    }
}

/// Generates the delta of `source` against `signature`.
///
/// # Errors
///
/// See [`DeltaGenerator::new`]; I/O errors from `source` are propagated.
pub fn generate_delta<S: ByteSource + ?Sized>(
    signature: &SignatureTable,
    source: &mut S,
    options: DeltaOptions,
) -> Result<Delta, DeltaError> {
    DeltaGenerator::new(signature, options)?.generate(source)
}

/// Opens `path` and generates its delta against `signature`.
pub fn generate_delta_file(
    signature: &SignatureTable,
    path: &Path,
    options: DeltaOptions,
) -> Result<Delta, DeltaError> {
    let generator = DeltaGenerator::new(signature, options)?;
    let mut reader = BufReader::new(File::open(path)?);
    generator.generate(&mut reader)
}
