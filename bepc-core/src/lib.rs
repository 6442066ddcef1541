#![no_std]

//! BEPC Core - Big-Endian Primitive Codec Format Definitions
//!
//! This crate provides the wire format, traits, validation and pure codec
//! functions for converting fixed-width primitive values and arrays to and
//! from big-endian bytes.
//!
//! | Kind | Encoding |
//! |---|---|
//! | `i8` | 1 byte |
//! | `i16`, `u16` (UTF-16 code unit) | 2 bytes, big-endian |
//! | `i32`, `f32` | 4 bytes, big-endian (floats by IEEE-754 bit pattern) |
//! | `i64`, `f64` | 8 bytes, big-endian (floats by IEEE-754 bit pattern) |
//! | `bool` | 1 byte, 0 = false, nonzero = true |
//! | `[bool]` | 2-byte count, then one bit per element, MSB first |
//! | `[T]` otherwise | concatenated element encodings, no header |
//!
//! Without the `alloc` feature only the scalar codec, bounds checks and
//! in-place boolean array reads are available.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod codec;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;
#[cfg(feature = "alloc")]
pub mod value;

pub use codec::*;
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
#[cfg(feature = "alloc")]
pub use value::{Decode, Encode, Value};
