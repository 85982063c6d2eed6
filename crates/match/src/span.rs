//! crates/match/src/span.rs
//!
//! Base-stream offsets attached to change records.
//!
//! Matched and deleted blocks use 1-based byte addressing. A literal run that
//! trails the last matched block is addressed from the end of that block,
//! which makes the run before any match start at offset 0.

use signature::ChunkSize;

/// Why a record is being placed at a block index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpanKind {
    /// Block `index` was found in the modified stream.
    Matched {
        /// Index of the matched block.
        index: u64,
    },
    /// Literals left over at end of stream, following `last_matched`.
    Trailing {
        /// Most recent matched block, or `None` when nothing matched.
        last_matched: Option<u64>,
    },
    /// Block `index` never appeared in the modified stream.
    Deleted {
        /// Index of the missing block.
        index: u64,
    },
}

/// Inclusive-start, inclusive-end offsets into the base block layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    /// First offset.
    pub start: i64,
    /// Last offset.
    pub end: i64,
}

impl Span {
    /// Offsets for a record of the given kind.
    ///
    /// A match of block 0 yields `-(C-1)..0`; this is kept as-is so that
    /// persisted deltas agree with the established layout.
    #[must_use]
    pub fn for_kind(kind: SpanKind, chunk_size: ChunkSize) -> Self {
        let chunk = i64::from(chunk_size.get());
        match kind {
            SpanKind::Matched { index } => {
                let index = index as i64;
                Self {
                    start: (index - 1) * chunk + 1,
                    end: index * chunk,
                }
            }
            SpanKind::Trailing { last_matched } => {
                let next = last_matched.map_or(0, |index| index as i64 + 1);
                Self {
                    start: next * chunk,
                    end: (next + 1) * chunk,
                }
            }
            SpanKind::Deleted { index } => {
                let index = index as i64;
                Self {
                    start: index * chunk + 1,
                    end: (index + 1) * chunk,
                }
            }
        }
    }

    /// Block index a record of the given kind is stored under.
    #[must_use]
    pub fn record_index(kind: SpanKind) -> u64 {
        match kind {
            SpanKind::Matched { index } | SpanKind::Deleted { index } => index,
            SpanKind::Trailing { last_matched } => last_matched.map_or(0, |index| index + 1),
        }
    }
}
