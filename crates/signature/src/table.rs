//! crates/signature/src/table.rs
//!
//! Checksum to block index mapping for a base stream.

use rustc_hash::FxHashMap;

use crate::chunk::ChunkSize;

/// Mapping from block checksum to block index.
///
/// Indices are assigned in the order blocks are read from the base stream,
/// starting at zero and including a final short block. When two blocks share a
/// checksum the later index replaces the earlier one (last write wins), so
/// [`len`](Self::len) can be smaller than [`block_count`](Self::block_count).
///
/// Optionally carries one strong digest per block index for callers that want
/// to confirm weak checksum hits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureTable {
    chunk_size: ChunkSize,
    entries: FxHashMap<u32, u64>,
    block_count: u64,
    strong: Option<Vec<u64>>,
}

impl SignatureTable {
    /// Creates an empty table for blocks of `chunk_size` bytes.
    #[must_use]
    pub fn new(chunk_size: ChunkSize) -> Self {
        Self {
            chunk_size,
            entries: FxHashMap::default(),
            block_count: 0,
            strong: None,
        }
    }

    /// Creates an empty table that records a strong digest for every block.
    #[must_use]
    pub fn with_strong_digests(chunk_size: ChunkSize) -> Self {
        Self {
            strong: Some(Vec::new()),
            ..Self::new(chunk_size)
        }
    }

    /// Appends the next block and returns the index it was assigned.
    ///
    /// `strong` is stored only when the table records strong digests; a table
    /// that does record them stores `0` when the caller passes `None`.
    pub fn push_block(&mut self, checksum: u32, strong: Option<u64>) -> u64 {
        let index = self.block_count;
        self.entries.insert(checksum, index);
        if let Some(digests) = self.strong.as_mut() {
            digests.push(strong.unwrap_or_default());
        }
        self.block_count += 1;
        index
    }

    /// Rebuilds a table from persisted parts without re-validating them.
    pub(crate) fn from_parts(
        chunk_size: ChunkSize,
        entries: FxHashMap<u32, u64>,
        block_count: u64,
        strong: Option<Vec<u64>>,
    ) -> Self {
        Self {
            chunk_size,
            entries,
            block_count,
            strong,
        }
    }

    /// Block size the table was generated with.
    #[must_use]
    pub const fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    /// Looks up the block index recorded for `checksum`.
    #[inline]
    #[must_use]
    pub fn get(&self, checksum: u32) -> Option<u64> {
        self.entries.get(&checksum).copied()
    }

    /// Number of distinct checksums in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of blocks read from the base stream, including overwritten ones.
    #[must_use]
    pub const fn block_count(&self) -> u64 {
        self.block_count
    }

    /// Iterates over `(checksum, index)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.entries.iter().map(|(&checksum, &index)| (checksum, index))
    }

    /// Iterates over the block indices reachable through the table.
    pub fn indices(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.values().copied()
    }

    /// Returns `true` when the table carries strong digests.
    #[must_use]
    pub const fn has_strong_digests(&self) -> bool {
        self.strong.is_some()
    }

    /// Strong digest recorded for block `index`, if any.
    #[must_use]
    pub fn strong_digest(&self, index: u64) -> Option<u64> {
        let digests = self.strong.as_ref()?;
        digests.get(usize::try_from(index).ok()?).copied()
    }

    pub(crate) fn strong_digests(&self) -> Option<&[u64]> {
        self.strong.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk() -> ChunkSize {
        ChunkSize::new(4).unwrap()
    }

    #[test]
    fn indices_follow_insertion_order() {
        let mut table = SignatureTable::new(chunk());
        assert_eq!(table.push_block(10, None), 0);
        assert_eq!(table.push_block(20, None), 1);
        assert_eq!(table.push_block(30, None), 2);

        assert_eq!(table.get(20), Some(1));
        assert_eq!(table.get(99), None);
        assert_eq!(table.len(), 3);
        assert_eq!(table.block_count(), 3);
    }

    #[test]
    fn colliding_checksum_keeps_last_index() {
        let mut table = SignatureTable::new(chunk());
        table.push_block(7, None);
        table.push_block(8, None);
        table.push_block(7, None);

        assert_eq!(table.get(7), Some(2));
        assert_eq!(table.len(), 2);
        assert_eq!(table.block_count(), 3);

        let mut indices: Vec<u64> = table.indices().collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn strong_digests_are_indexed_by_block() {
        let mut table = SignatureTable::with_strong_digests(chunk());
        table.push_block(1, Some(111));
        table.push_block(1, Some(222));

        assert!(table.has_strong_digests());
        assert_eq!(table.strong_digest(0), Some(111));
        assert_eq!(table.strong_digest(1), Some(222));
        assert_eq!(table.strong_digest(2), None);
    }

    #[test]
    fn plain_table_ignores_strong_values() {
        let mut table = SignatureTable::new(chunk());
        table.push_block(1, Some(111));
        assert!(!table.has_strong_digests());
        assert_eq!(table.strong_digest(0), None);
        assert!(table.strong_digests().is_none());
    }

    #[test]
    fn empty_table() {
        let table = SignatureTable::new(chunk());
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
        assert_eq!(table.chunk_size(), chunk());
    }
}
