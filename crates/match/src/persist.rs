//! crates/match/src/persist.rs
//!
//! Binary encoding of [`Delta`] values.
//!
//! Layout after the `RDDL` header: chunk size, record count, then one record
//! per block in ascending index order: index, signed start, signed end, a
//! deleted flag byte, and a length-prefixed literal run.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

use protocol::{
    FileKind, WireError, expect_end, read_bytes, read_header, read_signed_varint, read_u8,
    read_varint, write_header, write_signed_varint, write_varint,
};
use signature::ChunkSize;

use crate::generator::DeltaError;
use crate::record::{ChangeRecord, Delta};
use crate::span::Span;

/// Serialises `delta` to `writer`.
pub fn write_delta<W: Write + ?Sized>(writer: &mut W, delta: &Delta) -> Result<(), DeltaError> {
    write_header(writer, FileKind::Delta)?;
    write_varint(writer, u64::from(delta.chunk_size().get()))?;
    write_varint(writer, delta.len() as u64)?;
    for (&index, record) in delta {
        write_varint(writer, index)?;
        write_signed_varint(writer, record.start())?;
        write_signed_varint(writer, record.end())?;
        writer.write_all(&[u8::from(record.is_deleted())])?;
        write_varint(writer, record.literals().len() as u64)?;
        writer.write_all(record.literals())?;
    }
    Ok(())
}

/// Decodes a delta written by [`write_delta`].
pub fn read_delta<R: Read + ?Sized>(reader: &mut R) -> Result<Delta, DeltaError> {
    decode(reader).map_err(DeltaError::from)
}

fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Delta, WireError> {
    read_header(reader, FileKind::Delta)?;

    let raw_chunk = read_varint(reader)?;
    let chunk_size = u32::try_from(raw_chunk)
        .ok()
        .and_then(ChunkSize::new)
        .ok_or_else(|| WireError::invalid(format!("chunk size {raw_chunk} out of range")))?;

    let count = read_varint(reader)?;
    let mut delta = Delta::new(chunk_size);
    let mut previous: Option<u64> = None;
    for _ in 0..count {
        let index = read_varint(reader)?;
        if previous.is_some_and(|last| index <= last) {
            return Err(WireError::invalid(format!("block index {index} out of order")));
        }
        previous = Some(index);

        let span = Span {
            start: read_signed_varint(reader)?,
            end: read_signed_varint(reader)?,
        };
        let record = match read_u8(reader)? {
            0 => {
                let len = read_varint(reader)?;
                ChangeRecord::literal(span, read_bytes(reader, len)?)
            }
            1 => {
                if read_varint(reader)? != 0 {
                    return Err(WireError::invalid(format!(
                        "deleted block {index} carries literals"
                    )));
                }
                ChangeRecord::deleted(span)
            }
            other => {
                return Err(WireError::invalid(format!("deleted flag {other} is not 0 or 1")));
            }
        };
        delta.insert(index, record);
    }

    expect_end(reader)?;
    Ok(delta)
}

/// Writes `delta` to a new file at `path`, replacing any existing file.
#[cfg_attr(feature = "tracing", instrument(skip(delta), name = "save_delta"))]
pub fn save_delta(path: &Path, delta: &Delta) -> Result<(), DeltaError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_delta(&mut writer, delta)?;
    writer.flush()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "rdiff::persist", records = delta.len(), "delta saved");
    Ok(())
}

/// Reads a delta previously written by [`save_delta`].
#[cfg_attr(feature = "tracing", instrument(name = "load_delta"))]
pub fn load_delta(path: &Path) -> Result<Delta, DeltaError> {
    let mut reader = BufReader::new(File::open(path)?);
    let delta = read_delta(&mut reader)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "rdiff::persist", records = delta.len(), "delta loaded");
    Ok(delta)
}
