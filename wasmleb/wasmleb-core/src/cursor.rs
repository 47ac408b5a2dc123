//! Byte cursor with offset tracking.

use crate::error::EndOfInput;
use crate::source::ByteSource;

/// Cursor over a byte slice with absolute offset tracking.
///
/// `Copy`, so a caller that wants to undo a failed read can keep a
/// [`checkpoint`](Cursor::checkpoint) and [`rewind`](Cursor::rewind) to it.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute byte offset within the underlying slice.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Remaining unread length.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// True if at end of input.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Peek next byte without advancing.
    pub fn peek_u8(&self) -> Result<u8, EndOfInput> {
        self.data.get(self.pos).copied().ok_or(EndOfInput)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, EndOfInput> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    /// Read exactly n bytes and return a slice view into the underlying data.
    /// On shortfall nothing is consumed.
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8], EndOfInput> {
        let end = self.pos.checked_add(n).ok_or(EndOfInput)?;
        let slice = self.data.get(self.pos..end).ok_or(EndOfInput)?;
        self.pos = end;
        Ok(slice)
    }

    /// Skip exactly n bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), EndOfInput> {
        self.read_slice(n).map(|_| ())
    }

    /// Snapshot of the current position.
    pub fn checkpoint(&self) -> usize {
        self.pos
    }

    /// Move back (or forward) to a previously taken checkpoint.
    /// Positions past the end clamp to the end.
    pub fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint.min(self.data.len());
    }
}

impl ByteSource for Cursor<'_> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, EndOfInput> {
        self.read_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_cursor_ops() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut c = Cursor::new(&bytes);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.peek_u8().unwrap(), 1);
        assert_eq!(c.read_u8().unwrap(), 1);
        assert_eq!(c.offset(), 1);
        let s = c.read_slice(3).unwrap();
        assert_eq!(s, &[2, 3, 4]);
        assert_eq!(c.remaining(), 4);
        c.skip(4).unwrap();
        assert!(c.is_eof());
        assert_eq!(c.read_u8(), Err(EndOfInput));
    }

    #[test]
    fn short_read_consumes_nothing() {
        let bytes = [1u8, 2];
        let mut c = Cursor::new(&bytes);
        assert_eq!(c.read_slice(3), Err(EndOfInput));
        assert_eq!(c.offset(), 0);
        assert_eq!(c.read_slice(usize::MAX), Err(EndOfInput));
    }

    #[test]
    fn rewind_to_checkpoint() {
        let bytes = [9u8, 8, 7];
        let mut c = Cursor::new(&bytes);
        c.read_u8().unwrap();
        let mark = c.checkpoint();
        c.skip(2).unwrap();
        c.rewind(mark);
        assert_eq!(c.rest(), &[8, 7]);
        c.rewind(100);
        assert!(c.is_eof());
        assert!(c.rest().is_empty());
    }
}
