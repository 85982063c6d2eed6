use super::checksum::MODULUS;

/// Snapshot of the rolling checksum accumulators.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RollingDigest {
    s1: u16,
    s2: u16,
    len: usize,
}

impl RollingDigest {
    /// Creates a digest from individual components.
    #[must_use]
    pub const fn new(sum1: u16, sum2: u16, len: usize) -> Self {
        Self {
            s1: sum1,
            s2: sum2,
            len,
        }
    }

    /// Computes the digest of `data` in one pass.
    ///
    /// ```
    /// use checksums::RollingDigest;
    ///
    /// assert_eq!(RollingDigest::from_bytes(b"This is a test").value(), 611517686);
    /// ```
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut s1: u32 = 1;
        let mut s2: u32 = 0;
        for &byte in data {
            s1 = (s1 + u32::from(byte)) % MODULUS;
            s2 = (s2 + s1) % MODULUS;
        }
        Self::new(s1 as u16, s2 as u16, data.len())
    }

    /// First accumulator: one plus the byte sum.
    #[must_use]
    pub const fn sum1(&self) -> u16 {
        self.s1
    }

    /// Second accumulator: sum of the prefix values of the first.
    #[must_use]
    pub const fn sum2(&self) -> u16 {
        self.s2
    }

    /// Number of bytes that contributed to the digest.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bytes contributed to the digest.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed 32-bit value, `sum2 * 65536 + sum1`.
    #[must_use]
    pub const fn value(&self) -> u32 {
        ((self.s2 as u32) << 16) | (self.s1 as u32)
    }
}
