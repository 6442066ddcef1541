//! Conversion between primitive values and big-endian bytes
//!
//! Every function here is pure and stateless. Scalars are read and written
//! at an explicit offset; arrays are whole-buffer conversions.

pub mod scalar;

#[cfg(feature = "alloc")]
pub mod array;
pub mod bits;
#[cfg(feature = "alloc")]
pub mod boxed;

pub use scalar::{decode_scalar, encode_scalar_into};

#[cfg(feature = "alloc")]
pub use scalar::encode_scalar;

#[cfg(feature = "alloc")]
pub use array::{decode_array, encode_array, ArrayCodec};

pub use bits::{packed_bool_at, read_bool_array_count};

#[cfg(feature = "alloc")]
pub use bits::{pack_bools, unpack_bools};

#[cfg(feature = "alloc")]
pub use boxed::{box_values, decode_boxed_array, encode_boxed_array, unbox_values};
