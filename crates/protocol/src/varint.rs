//! # Overview
//!
//! Lengths, counts, block indices and offsets in the persisted formats are
//! stored as unsigned LEB128 integers: seven payload bits per byte, least
//! significant group first, with the high bit marking that another byte
//! follows. Signed values (block offsets can be negative) are zigzag mapped
//! onto the unsigned encoding first so small magnitudes stay short.
//!
//! # Examples
//!
//! ```
//! use protocol::{decode_varint, encode_varint_to_vec};
//!
//! let mut encoded = Vec::new();
//! encode_varint_to_vec(300, &mut encoded);
//! assert_eq!(encoded, [0xac, 0x02]);
//! let (value, remainder) = decode_varint(&encoded).expect("varint decoding succeeds");
//! assert_eq!(value, 300);
//! assert!(remainder.is_empty());
//! ```

use std::io::{self, Read, Write};

/// Longest encoding of a `u64`.
const MAX_ENCODED_LEN: usize = 10;

fn invalid_data(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

/// Encodes `value` into at most [`MAX_ENCODED_LEN`] bytes.
fn encode_bytes(mut value: u64) -> (usize, [u8; MAX_ENCODED_LEN]) {
    let mut bytes = [0u8; MAX_ENCODED_LEN];
    let mut len = 0;
    loop {
        let group = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            bytes[len] = group;
            len += 1;
            return (len, bytes);
        }
        bytes[len] = group | 0x80;
        len += 1;
    }
}

/// Folds one more encoded byte into `value`.
///
/// Encodings wider than 64 bits are rejected, as are non-canonical ones that
/// end in a zero group, so every value has exactly one accepted encoding.
fn accumulate(value: &mut u64, byte: u8, index: usize) -> io::Result<bool> {
    if index >= MAX_ENCODED_LEN || (index == MAX_ENCODED_LEN - 1 && byte > 0x01) {
        return Err(invalid_data("varint exceeds 64 bits"));
    }
    if index > 0 && byte == 0 {
        return Err(invalid_data("varint has a redundant trailing group"));
    }
    *value |= u64::from(byte & 0x7f) << (7 * index);
    Ok(byte & 0x80 != 0)
}

const fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

const fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Writes `value` as an unsigned LEB128 integer.
pub fn write_varint<W: Write + ?Sized>(writer: &mut W, value: u64) -> io::Result<()> {
    let (len, bytes) = encode_bytes(value);
    writer.write_all(&bytes[..len])
}

/// Reads an unsigned LEB128 integer.
///
/// # Errors
///
/// Returns [`io::ErrorKind::UnexpectedEof`] when the input ends mid-integer and
/// [`io::ErrorKind::InvalidData`] when the encoding does not fit in 64 bits.
pub fn read_varint<R: Read + ?Sized>(reader: &mut R) -> io::Result<u64> {
    let mut value = 0u64;
    let mut index = 0;
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        if !accumulate(&mut value, byte[0], index)? {
            return Ok(value);
        }
        index += 1;
    }
}

/// Writes a signed integer using zigzag mapping followed by LEB128.
pub fn write_signed_varint<W: Write + ?Sized>(writer: &mut W, value: i64) -> io::Result<()> {
    write_varint(writer, zigzag(value))
}

/// Reads a signed integer written by [`write_signed_varint`].
pub fn read_signed_varint<R: Read + ?Sized>(reader: &mut R) -> io::Result<i64> {
    read_varint(reader).map(unzigzag)
}

/// Appends the LEB128 encoding of `value` to `out`.
pub fn encode_varint_to_vec(value: u64, out: &mut Vec<u8>) {
    let (len, bytes) = encode_bytes(value);
    out.extend_from_slice(&bytes[..len]);
}

/// Decodes an unsigned LEB128 integer from the front of `bytes`.
///
/// Returns the value together with the unread remainder.
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, &[u8])> {
    let mut value = 0u64;
    for (index, &byte) in bytes.iter().enumerate() {
        if !accumulate(&mut value, byte, index)? {
            return Ok((value, &bytes[index + 1..]));
        }
    }
    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "truncated variable-length integer",
    ))
}
