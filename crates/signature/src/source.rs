//! crates/signature/src/source.rs
//!
//! Forward-only byte source consumed by signature and delta generation.

use std::io::{self, BufRead};

/// Forward-only stream of bytes.
///
/// Implemented for every [`BufRead`], so slices, cursors and buffered files
/// can be passed directly.
pub trait ByteSource {
    /// Consumes and returns the next byte, or `None` at end of stream.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Returns the next byte without consuming it, or `None` at end of stream.
    fn peek_byte(&mut self) -> io::Result<Option<u8>>;

    /// Reads until `buf` is full or the stream ends, returning the byte count.
    ///
    /// Short reads from the underlying reader never produce a short result
    /// unless the stream is exhausted.
    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<R: BufRead + ?Sized> ByteSource for R {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }
}
