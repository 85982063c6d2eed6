#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `protocol` holds the byte-level building blocks shared by the signature and
//! delta file formats: a four-byte magic plus version header, LEB128
//! variable-length integers, and fixed-width little-endian helpers. The
//! higher-level crates decide which fields go where; this crate only makes
//! sure every field is written and read back the same way.
//!
//! # Errors
//!
//! Decoding failures surface as [`WireError`]. Structural problems (bad magic,
//! unknown version, truncated input, impossible values, trailing bytes) are
//! kept distinct from plain I/O failures so callers can tell a missing file
//! apart from a corrupt one via [`WireError::is_malformed`].
//!
//! # Examples
//!
//! ```
//! use protocol::{FileKind, read_header, write_header};
//!
//! let mut encoded = Vec::new();
//! write_header(&mut encoded, FileKind::Signature).unwrap();
//! read_header(&mut encoded.as_slice(), FileKind::Signature).unwrap();
//! assert!(read_header(&mut encoded.as_slice(), FileKind::Delta).is_err());
//! ```

mod error;
mod header;
pub mod varint;
mod wire;

pub use error::WireError;
pub use header::{FORMAT_VERSION, FileKind, read_header, write_header};
pub use varint::{
    decode_varint, encode_varint_to_vec, read_signed_varint, read_varint, write_signed_varint,
    write_varint,
};
pub use wire::{expect_end, read_bytes, read_u8, read_u32_le, read_u64_le};
