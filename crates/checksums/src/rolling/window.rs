//! Fixed-capacity byte window backing the rolling checksum.
//!
//! The window is a ring buffer over a single pre-allocated allocation. Bytes
//! enter at the back and leave from the front, which is exactly the access
//! pattern of a checksum sliding across a stream one byte at a time.

use std::num::NonZeroUsize;

/// Bounded FIFO of the most recently ingested bytes.
#[derive(Clone, Debug)]
pub struct Window {
    /// Backing storage, always exactly `capacity` bytes.
    buffer: Vec<u8>,
    /// Position of the oldest byte.
    head: usize,
    /// Number of bytes currently held.
    len: usize,
}

impl Window {
    /// Creates an empty window holding at most `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            buffer: vec![0u8; capacity.get()],
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of bytes the window can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of bytes currently held.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the window holds no bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when the window is at capacity.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Appends a byte to the back of the window.
    ///
    /// If the window is full, the oldest byte is overwritten and returned.
    #[inline]
    pub fn push_back(&mut self, byte: u8) -> Option<u8> {
        if self.len < self.buffer.len() {
            let pos = (self.head + self.len) % self.buffer.len();
            self.buffer[pos] = byte;
            self.len += 1;
            None
        } else {
            let outgoing = self.buffer[self.head];
            self.buffer[self.head] = byte;
            self.head = (self.head + 1) % self.buffer.len();
            Some(outgoing)
        }
    }

    /// Removes and returns the oldest byte, or `None` when empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let byte = self.buffer[self.head];
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        Some(byte)
    }

    /// Drops every byte.
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Returns the contents oldest-first as up to two slices.
    ///
    /// The second slice is non-empty only when the contents wrap around the
    /// end of the backing storage.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let end = self.head + self.len;
        if end <= self.buffer.len() {
            (&self.buffer[self.head..end], &[])
        } else {
            let second_len = end - self.buffer.len();
            (&self.buffer[self.head..], &self.buffer[..second_len])
        }
    }

    /// Iterates over the contents oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let (first, second) = self.as_slices();
        first.iter().chain(second.iter()).copied()
    }

    /// Copies the contents oldest-first into a fresh vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        let (first, second) = self.as_slices();
        let mut bytes = Vec::with_capacity(self.len);
        bytes.extend_from_slice(first);
        bytes.extend_from_slice(second);
        bytes
    }
}
