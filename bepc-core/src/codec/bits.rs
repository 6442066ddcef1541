//! Bit-packed boolean arrays
//!
//! Layout: a 2-byte big-endian element count (at most
//! [`MAX_BOOL_ARRAY_LEN`]), then `ceil(count / 8)` bytes. Element `i` is
//! bit `7 - (i % 8)` of byte `2 + i / 8`, so the first element of each
//! byte is its most significant bit.
//!
//! ```text
//! [true, false, true]  ->  00 03 | 1010_0000
//! ```
//!
//! Unused bits of the last byte are written as zero and ignored on read.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use byteorder::{BigEndian, ByteOrder};

use crate::error::{CodecError, Result};
use crate::format::constants::{
    BITS_PER_BYTE, BOOL_ARRAY_COUNT_SIZE, BOOL_ARRAY_FIRST_BIT, MAX_BOOL_ARRAY_LEN,
};
use crate::format::packed_bool_len;
use crate::validation::validate_scalar_bounds;

#[cfg(feature = "alloc")]
use crate::validation::validate_bool_array_len;

/// Byte index and mask of element `index`
#[inline]
const fn bit_position(index: usize) -> (usize, u8) {
    let byte = BOOL_ARRAY_COUNT_SIZE + index / BITS_PER_BYTE;
    let mask = BOOL_ARRAY_FIRST_BIT >> (index % BITS_PER_BYTE);
    (byte, mask)
}

/// Read and check the element count of a packed boolean array
///
/// Fails when the prefix is missing, when the count exceeds
/// [`MAX_BOOL_ARRAY_LEN`], or when the buffer is too short to hold
/// `count` bits. Bytes past the packed region are ignored.
pub fn read_bool_array_count(bytes: &[u8]) -> Result<usize> {
    validate_scalar_bounds(bytes.len(), 0, BOOL_ARRAY_COUNT_SIZE)?;

    let count = BigEndian::read_u16(&bytes[..BOOL_ARRAY_COUNT_SIZE]) as usize;
    if count > MAX_BOOL_ARRAY_LEN {
        return Err(CodecError::ArrayTooLong {
            len: count,
            max: MAX_BOOL_ARRAY_LEN,
        });
    }

    let needed = packed_bool_len(count);
    if bytes.len() < needed {
        return Err(CodecError::InsufficientBytes {
            needed,
            offset: 0,
            available: bytes.len(),
        });
    }

    Ok(count)
}

/// Read element `index` of a packed boolean array without decoding the rest
///
/// Returns `None` when `index` is not below the stored count.
pub fn packed_bool_at(bytes: &[u8], index: usize) -> Result<Option<bool>> {
    let count = read_bool_array_count(bytes)?;
    if index >= count {
        return Ok(None);
    }

    let (byte, mask) = bit_position(index);
    Ok(Some(bytes[byte] & mask != 0))
}

/// Pack booleans into the count-prefixed bit layout
#[cfg(feature = "alloc")]
pub fn pack_bools(values: &[bool]) -> Result<Vec<u8>> {
    validate_bool_array_len(values.len())?;

    let mut bytes = vec![0u8; packed_bool_len(values.len())];
    BigEndian::write_u16(&mut bytes[..BOOL_ARRAY_COUNT_SIZE], values.len() as u16);

    for (index, &value) in values.iter().enumerate() {
        if value {
            let (byte, mask) = bit_position(index);
            bytes[byte] |= mask;
        }
    }

    Ok(bytes)
}

/// Unpack a count-prefixed bit layout into booleans
#[cfg(feature = "alloc")]
pub fn unpack_bools(bytes: &[u8]) -> Result<Vec<bool>> {
    let count = read_bool_array_count(bytes)?;

    Ok((0..count)
        .map(|index| {
            let (byte, mask) = bit_position(index);
            bytes[byte] & mask != 0
        })
        .collect())
}
