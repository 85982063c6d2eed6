//! Fixed-width field helpers.

use std::io::Read;

use crate::error::WireError;

/// Upper bound on a single pre-allocation driven by a length prefix.
const MAX_PREALLOCATION: usize = 64 * 1024;

/// Reads a single byte.
pub fn read_u8<R: Read + ?Sized>(reader: &mut R) -> Result<u8, WireError> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Reads a little-endian `u32`.
pub fn read_u32_le<R: Read + ?Sized>(reader: &mut R) -> Result<u32, WireError> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Reads a little-endian `u64`.
pub fn read_u64_le<R: Read + ?Sized>(reader: &mut R) -> Result<u64, WireError> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Reads exactly `len` bytes.
///
/// The length comes from untrusted input, so the buffer grows as data
/// actually arrives instead of being allocated up front.
pub fn read_bytes<R: Read + ?Sized>(reader: &mut R, len: u64) -> Result<Vec<u8>, WireError> {
    let capacity = usize::try_from(len)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATION);
    let mut bytes = Vec::with_capacity(capacity);
    let read = (&mut *reader).take(len).read_to_end(&mut bytes)?;
    if (read as u64) < len {
        return Err(WireError::Truncated);
    }
    Ok(bytes)
}

/// Confirms the reader is exhausted.
pub fn expect_end<R: Read + ?Sized>(reader: &mut R) -> Result<(), WireError> {
    let mut probe = [0u8; 1];
    match reader.read(&mut probe)? {
        0 => Ok(()),
        _ => Err(WireError::TrailingData),
    }
}
