//! crates/match/src/pretty.rs
//!
//! Human-readable rendering of a [`Delta`].

use std::fmt;
use std::io::{self, Write};

use crate::record::{ChangeRecord, Delta};

/// Text view of a single change record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrettyRecord {
    /// Base block index.
    pub index: u64,
    /// First base offset.
    pub start: i64,
    /// Last base offset.
    pub end: i64,
    /// Whether the block was deleted.
    pub deleted: bool,
    /// Literal bytes decoded lossily as UTF-8.
    pub literals: String,
}

impl PrettyRecord {
    /// Builds the text view of `record` stored under `index`.
    #[must_use]
    pub fn new(index: u64, record: &ChangeRecord) -> Self {
        Self {
            index,
            start: record.start(),
            end: record.end(),
            deleted: record.is_deleted(),
            literals: String::from_utf8_lossy(record.literals()).into_owned(),
        }
    }
}

impl fmt::Display for PrettyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {} [{}..{}] ", self.index, self.start, self.end)?;
        if self.deleted {
            f.write_str("deleted")
        } else {
            // Debug formatting quotes the text and escapes control characters.
            write!(f, "literal {:?}", self.literals)
        }
    }
}

/// Text views of every record in ascending block order.
#[must_use]
pub fn pretty_records(delta: &Delta) -> Vec<PrettyRecord> {
    delta
        .iter()
        .map(|(&index, record)| PrettyRecord::new(index, record))
        .collect()
}

/// Writes one line per record of `delta` to `writer`.
pub fn render<W: Write + ?Sized>(delta: &Delta, writer: &mut W) -> io::Result<()> {
    for record in pretty_records(delta) {
        writeln!(writer, "{record}")?;
    }
    Ok(())
}
