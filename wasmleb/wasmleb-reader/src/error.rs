//! Offset-carrying errors for binary reads.
//! Offsets are absolute within the buffer the `Cursor` was built over and
//! point at the first byte of the item that failed.

use thiserror::Error;
use wasmleb_core::DecodeError;

/// Result alias for binary reading operations.
pub type Result<T> = core::result::Result<T, BinaryReadError>;

/// Errors that can occur while reading a WASM binary stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinaryReadError {
    #[error("malformed LEB128 ({ty}) at offset {offset}: {source}")]
    Leb128 {
        offset: usize,
        ty: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("unexpected EOF at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("length {len} at offset {offset} exceeds the {remaining} bytes remaining")]
    LengthOverflow {
        offset: usize,
        len: u32,
        remaining: usize,
    },

    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 { offset: usize },
}

impl BinaryReadError {
    /// Offset of the item that failed to read.
    pub fn offset(&self) -> usize {
        match self {
            BinaryReadError::Leb128 { offset, .. }
            | BinaryReadError::UnexpectedEof { offset }
            | BinaryReadError::LengthOverflow { offset, .. }
            | BinaryReadError::InvalidUtf8 { offset } => *offset,
        }
    }

    /// The underlying LEB128 violation, if that is what went wrong.
    pub fn decode_error(&self) -> Option<DecodeError> {
        match self {
            BinaryReadError::Leb128 { source, .. } => Some(*source),
            _ => None,
        }
    }
}
