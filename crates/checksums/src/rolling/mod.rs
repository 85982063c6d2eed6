//! Windowed rolling checksum used to locate base blocks inside a modified stream.
//!
//! # Algorithm
//!
//! Two accumulators are maintained over the bytes currently held in the window:
//! `s1 = 1 + Σ bytes (mod M)` and `s2 = Σ prefix values of s1 (mod M)` with
//! `M = 65521`. The packed value is `s2 * 65536 + s1`, so an empty window reads
//! as `1` and a full recomputation over a slice equals zlib's Adler-32.
//!
//! Appending `x` is `s1 += x; s2 += s1`. Removing the oldest byte `x` from a
//! window of `n` bytes subtracts its contribution to every prefix plus the
//! leading `1` it carried into the first prefix: `s1 -= x; s2 -= n * x + 1`.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use checksums::RollingChecksum;
//!
//! let mut rolling = RollingChecksum::new(NonZeroUsize::new(16).unwrap());
//! rolling.init(b"aThis is a test").unwrap();
//! assert_eq!(rolling.eject().unwrap(), b'a');
//! assert_eq!(rolling.value(), 611517686);
//! ```

mod checksum;
mod digest;
mod error;
mod window;

pub use checksum::{MODULUS, RollingChecksum};
pub use digest::RollingDigest;
pub use error::RollingError;
pub use window::Window;

#[cfg(test)]
mod tests;
