//! Single scalar encoding at a byte offset

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use crate::error::Result;
use crate::traits::Primitive;
use crate::validation::validate_scalar_bounds;

/// Write `value` big-endian into `dest` starting at `offset`
///
/// Fails with [`InsufficientBytes`](crate::CodecError::InsufficientBytes)
/// when fewer than `T::WIDTH` bytes remain after `offset`; `dest` is left
/// untouched in that case.
pub fn encode_scalar_into<T: Primitive>(value: T, dest: &mut [u8], offset: usize) -> Result<()> {
    validate_scalar_bounds(dest.len(), offset, T::WIDTH)?;
    value.write_be(&mut dest[offset..offset + T::WIDTH]);
    Ok(())
}

/// Read a `T` from `bytes` starting at `offset`
pub fn decode_scalar<T: Primitive>(bytes: &[u8], offset: usize) -> Result<T> {
    validate_scalar_bounds(bytes.len(), offset, T::WIDTH)?;
    Ok(T::read_be(&bytes[offset..offset + T::WIDTH]))
}

/// Encode `value` into a freshly allocated buffer of exactly `T::WIDTH` bytes
#[cfg(feature = "alloc")]
pub fn encode_scalar<T: Primitive>(value: T) -> Vec<u8> {
    let mut bytes = vec![0u8; T::WIDTH];
    value.write_be(&mut bytes);
    bytes
}
