//! crates/signature/src/chunk.rs
//!
//! Validated block size shared by signature and delta generation.

use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing a [`ChunkSize`] from text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid chunk size '{input}': expected a positive integer up to {max}", max = u32::MAX)]
pub struct InvalidChunkSize {
    input: String,
}

/// Number of bytes per block.
///
/// The same value must be used when generating a signature and when
/// generating a delta against it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChunkSize(NonZeroU32);

impl ChunkSize {
    /// Block size used when the caller does not choose one.
    pub const DEFAULT: Self = Self(NonZeroU32::new(16).unwrap());

    /// Creates a chunk size, rejecting zero.
    #[must_use]
    pub const fn new(bytes: u32) -> Option<Self> {
        match NonZeroU32::new(bytes) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the block size in bytes.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the block size as a `usize`.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0.get() as usize
    }

    /// Returns the block size as a non-zero window capacity.
    #[inline]
    #[must_use]
    pub fn window_capacity(self) -> NonZeroUsize {
        NonZeroUsize::new(self.as_usize()).unwrap_or(NonZeroUsize::MIN)
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChunkSize {
    type Err = InvalidChunkSize;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidChunkSize {
                input: input.to_owned(),
            })
    }
}

impl From<NonZeroU32> for ChunkSize {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixteen_bytes() {
        assert_eq!(ChunkSize::DEFAULT.get(), 16);
        assert_eq!(ChunkSize::default(), ChunkSize::DEFAULT);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(ChunkSize::new(0).is_none());
        assert!("0".parse::<ChunkSize>().is_err());
    }

    #[test]
    fn parses_decimal_text() {
        assert_eq!(" 4096 ".parse::<ChunkSize>().unwrap().get(), 4096);
    }

    #[test]
    fn parse_error_names_input() {
        let err = "-3".parse::<ChunkSize>().unwrap_err();
        assert!(err.to_string().contains("'-3'"));
    }

    #[test]
    fn window_capacity_matches() {
        let chunk = ChunkSize::new(700).unwrap();
        assert_eq!(chunk.window_capacity().get(), 700);
        assert_eq!(chunk.as_usize(), 700);
        assert_eq!(chunk.to_string(), "700");
    }
}
