//! wasmleb-core: LEB128 integer decoding with the range and canonical-form
//! rules of the WebAssembly binary format.
//!
//! One algorithm per signedness, generic over [`ByteSource`]. Buffers go
//! through [`Cursor`] (or a plain `&[u8]`), readers through [`IoSource`].
//!
//! ```
//! use wasmleb_core::{decode_signed_slice, decode_unsigned_slice, DecodeError};
//!
//! assert_eq!(decode_unsigned_slice(&[0xE5, 0x8E, 0x26], 32), Ok((624485, 3)));
//! assert_eq!(decode_signed_slice(&[0x9B, 0xF1, 0x59], 32), Ok((-624485, 3)));
//! assert_eq!(decode_unsigned_slice(&[0x80], 32), Err(DecodeError::UnexpectedEnd));
//! ```

pub mod cursor;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod leb128;
pub mod source;

pub use cursor::Cursor;
pub use error::{DecodeError, EndOfInput, Result};
#[cfg(feature = "std")]
pub use io::IoSource;
pub use leb128::{
    decode_signed, decode_signed_slice, decode_unsigned, decode_unsigned_slice, max_encoded_len,
    MAX_BIT_WIDTH,
};
pub use source::ByteSource;
