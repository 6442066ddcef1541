//! BEPC - Big-Endian Primitive Codec
//!
//! This library stores primitive values and arrays in owned big-endian byte
//! buffers and reads them back as any requested type.
//!
//! ## Architecture
//!
//! BEPC is split into a pure codec and a runtime layer:
//!
//! - **bepc-core**: Wire format, traits, validation and the pure codec (no I/O)
//! - **bepc**: The owning [`TypedBuffer`], persistence, JSON bridge and CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use bepc::{ScalarKind, TypeTag, TypedBuffer, Value};
//!
//! fn example() -> bepc::Result<()> {
//!     let mut buffer = TypedBuffer::new(&-1i32)?;
//!     assert_eq!(buffer.as_bytes(), &[0xff, 0xff, 0xff, 0xff]);
//!
//!     buffer.set(&[true, false, true])?;
//!     let flags = buffer.as_type(TypeTag::Array(ScalarKind::Bool))?;
//!     assert_eq!(flags, Value::BoolArray(vec![true, false, true]));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde**: serde derives and the [`json`] bridge
//! - **mmap**: zero-copy memory-mapped reads via [`file_io::map_buffer`]
//! - **cli**: the `bepc` command line tool

// Re-export core abstractions and format definitions
pub use bepc_core::{
    // Codec
    box_values, decode_array, decode_boxed_array, decode_scalar, encode_array,
    encode_boxed_array, encode_scalar, encode_scalar_into, pack_bools, unbox_values,
    unpack_bools, ArrayCodec,
    // Core traits
    ByteSource, Decode, Encode, Primitive,
    // Format definitions
    ScalarKind, TypeTag, Value,
    // Error handling
    CodecError, ErrorCategory,
    // Validation utilities
    parse_type_tag,
};

// Implementation modules
pub mod container;
pub mod error;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod json;

// Public exports
pub use container::TypedBuffer;
pub use error::{Error, Result};
pub use file_io::{read_buffer, write_buffer};
#[cfg(feature = "mmap")]
pub use file_io::{map_buffer, MappedBuffer};
