//! Streaming adapter over `std::io::Read`.

use std::io::{self, Read};

use crate::error::EndOfInput;
use crate::source::ByteSource;

/// Pulls bytes one at a time from a reader.
///
/// The decoder only understands "end of input", so an I/O failure other than
/// EOF also ends input; the error is parked here until the caller collects it
/// with [`take_io_error`](IoSource::take_io_error).
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    position: u64,
    error: Option<io::Error>,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            error: None,
        }
    }

    /// Bytes delivered so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The I/O error that ended input, if it was not a plain EOF.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_byte(&mut self) -> Result<u8, EndOfInput> {
        if self.error.is_some() {
            return Err(EndOfInput);
        }
        let mut buf = [0u8; 1];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.position += 1;
                Ok(buf[0])
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(EndOfInput),
            Err(e) => {
                self.error = Some(e);
                Err(EndOfInput)
            }
        }
    }
}
