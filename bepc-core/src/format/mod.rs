//! Binary format definitions for the BEPC wire layout
//!
//! This module contains pure data definitions: the scalar kinds, the
//! conversion targets built from them, and the arithmetic that sizes an
//! encoded buffer. No encoding happens here.

pub mod constants;
pub mod kind;
pub mod layout;

pub use kind::{ScalarKind, TypeTag};
pub use layout::{encoded_len, packed_bool_len};
