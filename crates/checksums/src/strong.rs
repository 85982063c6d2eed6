//! Strong block digests used to confirm weak checksum hits.
//!
//! The rolling checksum is deliberately weak: distinct blocks can share a
//! value. When a signature records strong digests, delta generation can
//! recompute the digest over the candidate window and only accept the match
//! when both agree.

use xxhash_rust::xxh64::Xxh64 as Xxh64State;

/// Seed applied to every block digest.
pub const BLOCK_SEED: u64 = 0;

/// Width in bytes of a serialized block digest.
pub const DIGEST_LEN: usize = 8;

/// XXH64 block digest.
///
/// # Examples
///
/// ```
/// use checksums::strong::Xxh64;
///
/// let one_shot = Xxh64::digest(b"chunk 1chunk 2");
///
/// let mut hasher = Xxh64::new();
/// hasher.update(b"chunk 1");
/// hasher.update(b"chunk 2");
/// assert_eq!(hasher.finalize(), one_shot);
/// ```
#[derive(Clone)]
pub struct Xxh64 {
    state: Xxh64State,
}

impl Xxh64 {
    /// Starts a streaming digest seeded with [`BLOCK_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Xxh64State::new(BLOCK_SEED),
        }
    }

    /// Feeds more bytes into the digest.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finishes the digest.
    #[must_use]
    pub fn finalize(&self) -> u64 {
        self.state.digest()
    }

    /// Computes the digest of `data` in one call.
    #[must_use]
    pub fn digest(data: &[u8]) -> u64 {
        xxhash_rust::xxh64::xxh64(data, BLOCK_SEED)
    }

    /// Computes the digest over two slices as if they were contiguous.
    ///
    /// Matches the shape returned by [`Window::as_slices`](crate::Window::as_slices).
    #[must_use]
    pub fn digest_parts(first: &[u8], second: &[u8]) -> u64 {
        let mut hasher = Self::new();
        hasher.update(first);
        hasher.update(second);
        hasher.finalize()
    }
}

impl Default for Xxh64 {
    fn default() -> Self {
        Self::new()
    }
}
