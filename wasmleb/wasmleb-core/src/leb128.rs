//! ULEB128/SLEB128 decoding for any declared width in `1..=64`.
//!
//! Group `i` holds bits `7*i ..= 7*i + 6`. The group at index `bits / 7` is
//! the last one a `bits`-wide integer may use; its continuation bit must be
//! clear and its unused high bits must be zero (unsigned) or a copy of the
//! sign bit (signed). Those checks run before the group is merged, so the
//! 64-bit accumulator never loses bits that matter.

use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};
use crate::source::ByteSource;

const CONTINUATION: u8 = 0x80;
const SIGN: u8 = 0x40;
const PAYLOAD: u8 = 0x7f;

/// Widest integer the decoder accepts.
pub const MAX_BIT_WIDTH: u32 = 64;

/// Most bytes an encoding of a `bits`-wide integer may take.
pub const fn max_encoded_len(bits: u32) -> usize {
    (bits / 7) as usize + 1
}

fn check_width(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_BIT_WIDTH {
        return Err(DecodeError::InvalidBitWidth(bits));
    }
    Ok(())
}

/// Decode an unsigned LEB128 integer of `bits` width.
///
/// Returns the value and the number of bytes pulled from `src`.
pub fn decode_unsigned<S>(src: &mut S, bits: u32) -> Result<(u64, usize)>
where
    S: ByteSource + ?Sized,
{
    check_width(bits)?;
    let last = bits / 7;
    let mut result: u64 = 0;
    let mut group: u32 = 0;

    loop {
        let byte = src.read_byte()?;
        let low = byte & PAYLOAD;

        if group == last {
            if byte & CONTINUATION != 0 {
                return Err(DecodeError::IntTooLong);
            }
            // 0..=6 value bits left in this group
            if low >> (bits - 7 * group) != 0 {
                return Err(DecodeError::IntTooLarge);
            }
        }

        result |= u64::from(low) << (7 * group);

        if byte & CONTINUATION == 0 {
            return Ok((result, group as usize + 1));
        }
        group += 1;
    }
}

/// Decode a signed (two's complement) LEB128 integer of `bits` width.
///
/// Returns the value and the number of bytes pulled from `src`.
pub fn decode_signed<S>(src: &mut S, bits: u32) -> Result<(i64, usize)>
where
    S: ByteSource + ?Sized,
{
    check_width(bits)?;
    let last = bits / 7;
    let mut acc: u64 = 0;
    let mut group: u32 = 0;

    loop {
        let byte = src.read_byte()?;

        if group == last {
            if byte & CONTINUATION != 0 {
                return Err(DecodeError::IntTooLong);
            }
            if !signed_tail_fits(byte, bits - 7 * group, acc, bits) {
                return Err(DecodeError::IntTooLarge);
            }
        }

        acc |= u64::from(byte & PAYLOAD) << (7 * group);

        if byte & CONTINUATION == 0 {
            let filled = 7 * (group + 1);
            if byte & SIGN != 0 && filled < u64::BITS {
                acc |= u64::MAX << filled;
            }
            return Ok((acc as i64, group as usize + 1));
        }
        group += 1;
    }
}

/// Whether the terminating byte of the last permitted group is in range.
///
/// `room` is the number of value bits left for this group (`0..=6`). Bits at
/// and above `room - 1` must all equal the sign bit. With `room == 0` the group
/// carries only padding, which must repeat bit `bits - 1` of what was already
/// decoded.
fn signed_tail_fits(byte: u8, room: u32, acc: u64, bits: u32) -> bool {
    if room == 0 {
        let negative = (acc >> (bits - 1)) & 1 == 1;
        return byte == if negative { PAYLOAD } else { 0 };
    }
    let shift = room - 1;
    if byte & SIGN == 0 {
        byte >> shift == 0
    } else {
        ((byte | CONTINUATION) as i8) >> shift == -1
    }
}

/// [`decode_unsigned`] over an in-memory buffer. The caller advances its own
/// position by the returned length.
pub fn decode_unsigned_slice(buf: &[u8], bits: u32) -> Result<(u64, usize)> {
    decode_unsigned(&mut Cursor::new(buf), bits)
}

/// [`decode_signed`] over an in-memory buffer. The caller advances its own
/// position by the returned length.
pub fn decode_signed_slice(buf: &[u8], bits: u32) -> Result<(i64, usize)> {
    decode_signed(&mut Cursor::new(buf), bits)
}
