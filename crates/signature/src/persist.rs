//! crates/signature/src/persist.rs
//!
//! Binary encoding of [`SignatureTable`] values.
//!
//! Layout after the `RDSG` header: chunk size, a flags byte, the block count,
//! the entry count, then `(checksum u32 LE, index varint)` pairs sorted by
//! index. When flag bit 0 is set one little-endian XXH64 digest per block
//! follows in index order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use rustc_hash::FxHashMap;
#[cfg(feature = "tracing")]
use tracing::instrument;

use protocol::{
    FileKind, WireError, expect_end, read_header, read_u8, read_u32_le, read_u64_le, read_varint,
    write_header, write_varint,
};

use crate::chunk::ChunkSize;
use crate::generation::SignatureError;
use crate::table::SignatureTable;

const FLAG_STRONG: u8 = 0b0000_0001;
const KNOWN_FLAGS: u8 = FLAG_STRONG;

/// Serialises `table` to `writer`.
///
/// Entries are written in index order so identical tables always produce
/// identical bytes.
pub fn write_signature<W: Write + ?Sized>(
    writer: &mut W,
    table: &SignatureTable,
) -> Result<(), SignatureError> {
    write_header(writer, FileKind::Signature)?;
    write_varint(writer, u64::from(table.chunk_size().get()))?;
    let flags = if table.has_strong_digests() { FLAG_STRONG } else { 0 };
    writer.write_all(&[flags])?;
    write_varint(writer, table.block_count())?;

    let mut entries: Vec<(u32, u64)> = table.iter().collect();
    entries.sort_unstable_by_key(|&(_, index)| index);
    write_varint(writer, entries.len() as u64)?;
    for (checksum, index) in entries {
        writer.write_all(&checksum.to_le_bytes())?;
        write_varint(writer, index)?;
    }

    if let Some(digests) = table.strong_digests() {
        for digest in digests {
            writer.write_all(&digest.to_le_bytes())?;
        }
    }
    Ok(())
}

/// Decodes a table written by [`write_signature`].
///
/// The reader must contain exactly one document; trailing bytes are rejected.
pub fn read_signature<R: Read + ?Sized>(reader: &mut R) -> Result<SignatureTable, SignatureError> {
    decode(reader).map_err(SignatureError::from)
}

fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<SignatureTable, WireError> {
    read_header(reader, FileKind::Signature)?;

    let raw_chunk = read_varint(reader)?;
    let chunk_size = u32::try_from(raw_chunk)
        .ok()
        .and_then(ChunkSize::new)
        .ok_or_else(|| WireError::invalid(format!("chunk size {raw_chunk} out of range")))?;

    let flags = read_u8(reader)?;
    if flags & !KNOWN_FLAGS != 0 {
        return Err(WireError::invalid(format!("unknown flags {flags:#04x}")));
    }

    let block_count = read_varint(reader)?;
    // Delta offsets reach `(block_count + 1) * chunk_size` and are stored as i64.
    i64::try_from(block_count)
        .ok()
        .and_then(|count| count.checked_add(1))
        .and_then(|count| count.checked_mul(i64::from(chunk_size.get())))
        .ok_or_else(|| {
            WireError::invalid(format!(
                "{block_count} blocks of {chunk_size} bytes exceed the offset range"
            ))
        })?;
    let entry_count = read_varint(reader)?;
    if entry_count > block_count {
        return Err(WireError::invalid(format!(
            "{entry_count} entries exceed {block_count} blocks"
        )));
    }

    let mut entries = FxHashMap::default();
    let mut previous: Option<u64> = None;
    for _ in 0..entry_count {
        let checksum = read_u32_le(reader)?;
        let index = read_varint(reader)?;
        if index >= block_count {
            return Err(WireError::invalid(format!(
                "block index {index} outside {block_count} blocks"
            )));
        }
        if previous.is_some_and(|last| index <= last) {
            return Err(WireError::invalid(format!("block index {index} out of order")));
        }
        if entries.insert(checksum, index).is_some() {
            return Err(WireError::invalid(format!(
                "checksum {checksum:#010x} listed twice"
            )));
        }
        previous = Some(index);
    }

    let strong = if flags & FLAG_STRONG == 0 {
        None
    } else {
        let mut digests = Vec::new();
        for _ in 0..block_count {
            digests.push(read_u64_le(reader)?);
        }
        Some(digests)
    };

    expect_end(reader)?;
    Ok(SignatureTable::from_parts(
        chunk_size,
        entries,
        block_count,
        strong,
    ))
}

/// Writes `table` to a new file at `path`, replacing any existing file.
#[cfg_attr(feature = "tracing", instrument(skip(table), name = "save_signature"))]
pub fn save_signature(path: &Path, table: &SignatureTable) -> Result<(), SignatureError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_signature(&mut writer, table)?;
    writer.flush()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "rdiff::persist", entries = table.len(), "signature saved");
    Ok(())
}

/// Reads a table previously written by [`save_signature`].
#[cfg_attr(feature = "tracing", instrument(name = "load_signature"))]
pub fn load_signature(path: &Path) -> Result<SignatureTable, SignatureError> {
    let mut reader = BufReader::new(File::open(path)?);
    let table = read_signature(&mut reader)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "rdiff::persist",
        entries = table.len(),
        blocks = table.block_count(),
        "signature loaded"
    );
    Ok(table)
}
