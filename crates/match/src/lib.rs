#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Delta generation against block signatures.
//!
//! [`DeltaGenerator`] slides the rolling checksum from the `checksums` crate
//! over a modified stream, looks each full window up in a
//! [`SignatureTable`](signature::SignatureTable), and collects the unmatched
//! bytes into literal runs. The result is a sparse [`Delta`] keyed by base
//! block index:
//!
//! - a block absent from the delta was found in place with nothing around it;
//! - a deleted record marks a block that never appeared;
//! - a literal record carries the bytes that preceded the block's match, or
//!   that trailed the last match at end of stream.
//!
//! Deltas persist with [`write_delta`] / [`read_delta`] and render for people
//! with [`pretty::render`].
//!
//! # Examples
//!
//! ```
//! use matching::{DeltaOptions, generate_delta};
//! use signature::{ChunkSize, SignatureOptions, generate_signature};
//!
//! let options = SignatureOptions::new(ChunkSize::new(4).unwrap());
//! let table = generate_signature(&mut &b"aaaabbbbcccc"[..], options).unwrap();
//!
//! let delta = generate_delta(&table, &mut &b"aaaaXbbbbcccc"[..], DeltaOptions::new()).unwrap();
//! assert_eq!(delta.len(), 1);
//! assert_eq!(delta.get(1).unwrap().literals(), b"X");
//! ```

mod generator;
mod persist;
pub mod pretty;
mod record;
mod span;

pub use generator::{DeltaError, DeltaGenerator, DeltaOptions, generate_delta, generate_delta_file};
pub use persist::{load_delta, read_delta, save_delta, write_delta};
pub use pretty::PrettyRecord;
pub use record::{ChangeRecord, Delta};
pub use span::{Span, SpanKind};
