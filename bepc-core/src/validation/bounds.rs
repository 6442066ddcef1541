//! Buffer bounds validation for BEPC conversions
//!
//! This module provides pure arithmetic checks that run before any
//! scalar or array is read from a buffer.

use crate::error::{CodecError, Result};
use crate::format::constants::MAX_BOOL_ARRAY_LEN;

/// Validate that `width` bytes are available at `offset`
///
/// An offset past the end of the buffer reports zero available bytes.
pub const fn validate_scalar_bounds(byte_len: usize, offset: usize, width: usize) -> Result<()> {
    let available = byte_len.saturating_sub(offset);
    if available < width {
        return Err(CodecError::InsufficientBytes {
            needed: width,
            offset,
            available,
        });
    }
    Ok(())
}

/// Validate array bounds for a given element width
///
/// Returns the element count when `byte_len` is a whole number of
/// `width`-byte elements.
pub const fn validate_array_bounds(byte_len: usize, width: usize) -> Result<usize> {
    if width == 0 || byte_len % width != 0 {
        return Err(CodecError::ArrayAlignment { byte_len, width });
    }

    Ok(byte_len / width)
}

/// Validate that a boolean array fits the 2-byte count prefix
pub const fn validate_bool_array_len(len: usize) -> Result<()> {
    if len > MAX_BOOL_ARRAY_LEN {
        return Err(CodecError::ArrayTooLong {
            len,
            max: MAX_BOOL_ARRAY_LEN,
        });
    }
    Ok(())
}
