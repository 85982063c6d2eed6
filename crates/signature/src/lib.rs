#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Block signatures of a base stream.
//!
//! A signature partitions the base stream into consecutive, non-overlapping
//! blocks of [`ChunkSize`] bytes (the final block may be shorter) and maps the
//! rolling checksum of each block to its zero-based index. Delta generation in
//! the `matching` crate slides the same checksum over a modified stream and
//! looks each window up in this table.
//!
//! - [`generate_signature`] builds a [`SignatureTable`] from any [`ByteSource`].
//! - [`generate_signature_file`] adds the file-level length validation.
//! - [`write_signature`] / [`read_signature`] persist a table.
//!
//! # Examples
//!
//! ```
//! use signature::{ChunkSize, SignatureOptions, generate_signature};
//!
//! let options = SignatureOptions::new(ChunkSize::new(4).unwrap());
//! let table = generate_signature(&mut &b"abcdefghij"[..], options).unwrap();
//! assert_eq!(table.block_count(), 3);
//! assert_eq!(table.len(), 3);
//! ```

mod chunk;
mod generation;
mod persist;
mod source;
mod table;

pub use chunk::{ChunkSize, InvalidChunkSize};
pub use generation::{
    SignatureError, SignatureOptions, generate_signature, generate_signature_file,
};
pub use persist::{load_signature, read_signature, save_signature, write_signature};
pub use source::ByteSource;
pub use table::SignatureTable;
