//! Typed WASM integer reads, length-prefixed vectors, and names.
//!
//! Each integer reader fixes the declared width of one WASM integer type and
//! reports failures at the offset where that integer began. On error the
//! cursor is left wherever the decoder stopped.

use log::debug;
use wasmleb_core::{decode_signed, decode_unsigned, Cursor, DecodeError};

use crate::error::{BinaryReadError, Result};

fn leb_error(offset: usize, ty: &'static str, source: DecodeError) -> BinaryReadError {
    debug!("malformed LEB128 ({ty}) at offset {offset}: {source}");
    BinaryReadError::Leb128 { offset, ty, source }
}

fn read_unsigned(cur: &mut Cursor, bits: u32, ty: &'static str) -> Result<u64> {
    let start = cur.offset();
    decode_unsigned(cur, bits)
        .map(|(v, _)| v)
        .map_err(|e| leb_error(start, ty, e))
}

fn read_signed(cur: &mut Cursor, bits: u32, ty: &'static str) -> Result<i64> {
    let start = cur.offset();
    decode_signed(cur, bits)
        .map(|(v, _)| v)
        .map_err(|e| leb_error(start, ty, e))
}

/// Read one raw byte.
pub fn read_u8(cur: &mut Cursor) -> Result<u8> {
    let offset = cur.offset();
    cur.read_u8()
        .map_err(|_| BinaryReadError::UnexpectedEof { offset })
}

/// `varuint1`: flags such as global mutability.
pub fn read_var_u1(cur: &mut Cursor) -> Result<bool> {
    read_unsigned(cur, 1, "varuint1").map(|v| v == 1)
}

/// `varuint7`: value type and form codes.
pub fn read_var_u7(cur: &mut Cursor) -> Result<u8> {
    read_unsigned(cur, 7, "varuint7").map(|v| v as u8)
}

/// `varint7`.
pub fn read_var_i7(cur: &mut Cursor) -> Result<i8> {
    read_signed(cur, 7, "varint7").map(|v| v as i8)
}

/// Decode an unsigned LEB128 as u32 (max 5 bytes).
pub fn read_var_u32(cur: &mut Cursor) -> Result<u32> {
    read_unsigned(cur, 32, "u32").map(|v| v as u32)
}

/// Decode a signed LEB128 as i32 (max 5 bytes).
pub fn read_var_i32(cur: &mut Cursor) -> Result<i32> {
    read_signed(cur, 32, "i32").map(|v| v as i32)
}

/// Signed 33-bit integer used for block type indices.
pub fn read_var_s33(cur: &mut Cursor) -> Result<i64> {
    read_signed(cur, 33, "s33")
}

/// Decode an unsigned LEB128 as u64 (max 10 bytes).
pub fn read_var_u64(cur: &mut Cursor) -> Result<u64> {
    read_unsigned(cur, 64, "u64")
}

/// Decode a signed LEB128 as i64 (max 10 bytes).
pub fn read_var_i64(cur: &mut Cursor) -> Result<i64> {
    read_signed(cur, 64, "i64")
}

/// Read a length-prefixed run of raw bytes (u32 length via ULEB128).
/// Errors point at the length prefix.
pub fn read_len_prefixed_bytes<'a>(cur: &mut Cursor<'a>) -> Result<&'a [u8]> {
    let offset = cur.offset();
    let len = read_var_u32(cur)?;
    let remaining = cur.remaining();
    cur.read_slice(len as usize).map_err(|_| {
        debug!("length {len} at offset {offset} overruns input ({remaining} left)");
        BinaryReadError::LengthOverflow {
            offset,
            len,
            remaining,
        }
    })
}

/// Read a UTF-8 name (length-prefixed bytes).
pub fn read_name<'a>(cur: &mut Cursor<'a>) -> Result<&'a str> {
    let offset = cur.offset();
    let bytes = read_len_prefixed_bytes(cur)?;
    core::str::from_utf8(bytes).map_err(|_| BinaryReadError::InvalidUtf8 { offset })
}

/// Read a vector of T using the provided element reader closure.
/// Length is encoded as ULEB128 u32.
pub fn read_vec<'a, T, F>(cur: &mut Cursor<'a>, mut elem: F) -> Result<Vec<T>>
where
    F: FnMut(&mut Cursor<'a>) -> Result<T>,
{
    let len = read_var_u32(cur)? as usize;
    // a hostile count must not reserve more than the input could describe
    let mut out = Vec::with_capacity(len.min(cur.remaining()));
    for _ in 0..len {
        out.push(elem(cur)?);
    }
    Ok(out)
}
