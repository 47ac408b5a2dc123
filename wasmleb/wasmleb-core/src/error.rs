//! Error types for LEB128 decoding.

use thiserror::Error;

/// Result alias for decode operations.
pub type Result<T> = core::result::Result<T, DecodeError>;

/// Signalled by a [`ByteSource`](crate::ByteSource) that has no more bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("end of input")]
pub struct EndOfInput;

/// Why a LEB128 sequence could not be decoded.
///
/// Every variant is terminal for the current call. Bytes already pulled from
/// the source stay consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended before a byte with the continuation bit clear.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// More groups than the declared width permits.
    #[error("integer too long")]
    IntTooLong,

    /// The terminating byte carries bits outside the declared width,
    /// or sign padding that disagrees with the sign bit.
    #[error("integer representation too large")]
    IntTooLarge,

    /// Declared width is outside `1..=64`.
    #[error("unsupported bit width {0} (expected 1..=64)")]
    InvalidBitWidth(u32),
}

impl From<EndOfInput> for DecodeError {
    fn from(_: EndOfInput) -> Self {
        DecodeError::UnexpectedEnd
    }
}
