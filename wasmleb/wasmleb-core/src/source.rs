//! The byte supply the decoder pulls from.

use crate::error::EndOfInput;

/// Something that hands out bytes one at a time, in order.
///
/// Each successful call advances the source by exactly one byte. Once
/// [`EndOfInput`] is returned the decoder stops asking.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<u8, EndOfInput>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, EndOfInput> {
        (**self).read_byte()
    }
}

/// A shrinking slice: each read drops the front byte, like `io::Read for &[u8]`.
impl ByteSource for &[u8] {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, EndOfInput> {
        let (&b, rest) = self.split_first().ok_or(EndOfInput)?;
        *self = rest;
        Ok(b)
    }
}
