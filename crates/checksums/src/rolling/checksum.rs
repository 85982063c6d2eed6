use std::num::NonZeroUsize;

use super::digest::RollingDigest;
use super::error::RollingError;
use super::window::Window;

/// Prime modulus shared by both accumulators (largest prime below 2^16).
pub const MODULUS: u32 = 65521;

/// Rolling checksum over a bounded window of bytes.
///
/// The checksum owns its [`Window`], so callers can slide it across a stream
/// with [`ingest`](Self::ingest) and [`eject`](Self::eject) without keeping a
/// copy of the bytes themselves. Values produced by incremental updates are
/// always identical to [`init`](Self::init) over the same window contents.
#[doc(alias = "adler32")]
#[derive(Clone, Debug)]
pub struct RollingChecksum {
    s1: u32,
    s2: u32,
    window: Window,
}

impl RollingChecksum {
    /// Creates an empty checksum whose window holds at most `capacity` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use checksums::RollingChecksum;
    ///
    /// let checksum = RollingChecksum::new(NonZeroUsize::new(16).unwrap());
    /// assert!(checksum.is_empty());
    /// assert_eq!(checksum.value(), 1);
    /// ```
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            s1: 1,
            s2: 0,
            window: Window::with_capacity(capacity),
        }
    }

    /// Empties the window and returns the accumulators to their initial state.
    pub fn reset(&mut self) {
        self.s1 = 1;
        self.s2 = 0;
        self.window.clear();
    }

    /// Replaces the window with `bytes` and recomputes the checksum from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`RollingError::WindowOverflow`] when `bytes` is longer than the
    /// window capacity. The checksum is left untouched in that case.
    pub fn init(&mut self, bytes: &[u8]) -> Result<(), RollingError> {
        if bytes.len() > self.window.capacity() {
            return Err(RollingError::WindowOverflow {
                len: bytes.len(),
                capacity: self.window.capacity(),
            });
        }

        self.reset();

        let mut s1 = self.s1;
        let mut s2 = self.s2;

        let mut iter = bytes.chunks_exact(4);
        for block in &mut iter {
            s1 += u32::from(block[0]);
            s2 += s1;
            s1 += u32::from(block[1]);
            s2 += s1;
            s1 += u32::from(block[2]);
            s2 += s1;
            s1 += u32::from(block[3]);
            s2 += s1;

            s1 %= MODULUS;
            s2 %= MODULUS;
        }

        for &byte in iter.remainder() {
            s1 = (s1 + u32::from(byte)) % MODULUS;
            s2 = (s2 + s1) % MODULUS;
        }

        for &byte in bytes {
            self.window.push_back(byte);
        }
        self.s1 = s1;
        self.s2 = s2;
        Ok(())
    }

    /// Appends `byte` to the window and returns the updated checksum.
    ///
    /// When the window is already full the oldest byte is ejected first, so
    /// the window never grows past its capacity.
    #[inline]
    pub fn ingest(&mut self, byte: u8) -> u32 {
        if self.window.is_full() {
            let len = self.window.len();
            if let Some(outgoing) = self.window.pop_front() {
                self.remove(outgoing, len);
            }
        }

        self.window.push_back(byte);
        self.s1 = (self.s1 + u32::from(byte)) % MODULUS;
        self.s2 = (self.s2 + self.s1) % MODULUS;
        self.value()
    }

    /// Removes the oldest byte from the window and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RollingError::EmptyWindow`] when there is nothing to remove.
    #[inline]
    pub fn eject(&mut self) -> Result<u8, RollingError> {
        let len = self.window.len();
        let outgoing = self.window.pop_front().ok_or(RollingError::EmptyWindow)?;
        self.remove(outgoing, len);
        Ok(outgoing)
    }

    /// Subtracts `outgoing`, which was the oldest of `len` bytes, from both accumulators.
    #[inline]
    fn remove(&mut self, outgoing: u8, len: usize) {
        let out = u32::from(outgoing);
        let weighted = ((len as u64 * u64::from(out) + 1) % u64::from(MODULUS)) as u32;

        self.s1 = (self.s1 + MODULUS - out) % MODULUS;
        self.s2 = (self.s2 + MODULUS - weighted) % MODULUS;
    }

    /// Returns the packed checksum `s2 * 65536 + s1`.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        (self.s2 << 16) | self.s1
    }

    /// Returns the current state as a structured digest.
    #[must_use]
    pub fn digest(&self) -> RollingDigest {
        RollingDigest::new(self.s1 as u16, self.s2 as u16, self.window.len())
    }

    /// Number of bytes currently in the window.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` when the window holds no bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Returns `true` when the window holds `capacity` bytes.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// Maximum number of bytes the window holds.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Borrows the window contents.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Copies the window contents oldest-first.
    #[must_use]
    pub fn window_bytes(&self) -> Vec<u8> {
        self.window.to_vec()
    }
}
