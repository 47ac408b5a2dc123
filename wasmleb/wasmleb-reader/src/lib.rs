//! wasmleb-reader: the integer and vector reads a WASM section parser makes,
//! built on wasmleb-core, with errors that name the byte offset and the
//! violation.
//!
//! ```
//! use wasmleb_core::Cursor;
//! use wasmleb_reader::{read_var_u32, BinaryReadError};
//!
//! let mut cur = Cursor::new(&[0xE5, 0x8E, 0x26, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00]);
//! assert_eq!(read_var_u32(&mut cur), Ok(624485));
//! let err = read_var_u32(&mut cur).unwrap_err();
//! assert_eq!(err.to_string(), "malformed LEB128 (u32) at offset 3: integer too long");
//! assert!(matches!(err, BinaryReadError::Leb128 { offset: 3, .. }));
//! ```

pub mod error;
pub mod reader;

pub use error::{BinaryReadError, Result};
pub use reader::{
    read_len_prefixed_bytes, read_name, read_u8, read_var_i32, read_var_i64, read_var_i7,
    read_var_s33, read_var_u1, read_var_u32, read_var_u64, read_var_u7, read_vec,
};
