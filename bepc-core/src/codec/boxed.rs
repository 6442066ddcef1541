//! Nullable element arrays
//!
//! A boxed array is `[Option<T>]`. It has no wire format of its own: it is
//! unboxed (missing elements become the kind's zero value) and encoded as a
//! plain array, and decoded arrays are boxed with every element present.

use alloc::vec::Vec;

use super::array::ArrayCodec;
use crate::error::Result;
use crate::traits::Primitive;

/// Wrap every element in `Some`
pub fn box_values<T: Primitive>(values: &[T]) -> Vec<Option<T>> {
    values.iter().copied().map(Some).collect()
}

/// Replace every `None` with the zero value of `T`
pub fn unbox_values<T: Primitive>(boxed: &[Option<T>]) -> Vec<T> {
    boxed.iter().map(|v| v.unwrap_or_default()).collect()
}

/// Encode a nullable array through its unboxed form
pub fn encode_boxed_array<T: ArrayCodec>(boxed: &[Option<T>]) -> Result<Vec<u8>> {
    T::encode_array(&unbox_values(boxed))
}

/// Decode an array and box every element
pub fn decode_boxed_array<T: ArrayCodec>(bytes: &[u8]) -> Result<Vec<Option<T>>> {
    let values = T::decode_array(bytes)?;
    Ok(values.into_iter().map(Some).collect())
}
