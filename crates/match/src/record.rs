//! crates/match/src/record.rs
//!
//! Change records and the sparse delta they form.

use std::collections::BTreeMap;
use std::collections::btree_map;

use signature::ChunkSize;

use crate::span::Span;

/// One entry of a [`Delta`], keyed by base block index.
///
/// A record is either a deletion (the block never appeared in the modified
/// stream) or a literal run attached to the boundary following the block.
/// A deleted record never carries literals.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChangeRecord {
    start: i64,
    end: i64,
    deleted: bool,
    literals: Vec<u8>,
}

impl ChangeRecord {
    /// A record marking the block covered by `span` as deleted.
    #[must_use]
    pub const fn deleted(span: Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
            deleted: true,
            literals: Vec::new(),
        }
    }

    /// A record carrying `literals` at `span`.
    #[must_use]
    pub const fn literal(span: Span, literals: Vec<u8>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            deleted: false,
            literals,
        }
    }

    /// First base offset covered by the record.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Last base offset covered by the record.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Offsets as a [`Span`].
    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns `true` for deletion records.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Literal bytes of the record; empty for deletions.
    #[must_use]
    pub fn literals(&self) -> &[u8] {
        &self.literals
    }

    /// Whether the record carries no information (a matched block with no
    /// adjacent change).
    pub(crate) fn is_unchanged(&self) -> bool {
        !self.deleted && self.literals.is_empty()
    }
}

/// Sparse description of how a modified stream differs from its base.
///
/// Blocks that were matched in place with no adjacent literals are absent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Delta {
    chunk_size: ChunkSize,
    records: BTreeMap<u64, ChangeRecord>,
}

impl Delta {
    /// An empty delta for blocks of `chunk_size` bytes.
    #[must_use]
    pub const fn new(chunk_size: ChunkSize) -> Self {
        Self {
            chunk_size,
            records: BTreeMap::new(),
        }
    }

    /// Stores `record` under `index`, returning the record it replaced.
    pub fn insert(&mut self, index: u64, record: ChangeRecord) -> Option<ChangeRecord> {
        self.records.insert(index, record)
    }

    /// Block size of the signature this delta was generated against.
    #[must_use]
    pub const fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the modified stream matched its base exactly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record stored for block `index`.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<&ChangeRecord> {
        self.records.get(&index)
    }

    /// Returns `true` when a record exists for block `index`.
    #[must_use]
    pub fn contains(&self, index: u64) -> bool {
        self.records.contains_key(&index)
    }

    /// Records in ascending block index order.
    pub fn iter(&self) -> btree_map::Iter<'_, u64, ChangeRecord> {
        self.records.iter()
    }

    /// Indices of blocks marked deleted, ascending.
    pub fn deleted_blocks(&self) -> impl Iterator<Item = u64> + '_ {
        self.records
            .iter()
            .filter(|(_, record)| record.is_deleted())
            .map(|(&index, _)| index)
    }

    /// Total number of literal bytes across all records.
    #[must_use]
    pub fn literal_bytes_total(&self) -> u64 {
        self.records
            .values()
            .map(|record| record.literals.len() as u64)
            .sum()
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&u64, &mut ChangeRecord) -> bool) {
        self.records.retain(keep);
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = (&'a u64, &'a ChangeRecord);
    type IntoIter = btree_map::Iter<'a, u64, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
