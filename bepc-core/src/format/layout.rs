//! Buffer sizing for encoded values

use super::constants::{BITS_PER_BYTE, BOOL_ARRAY_COUNT_SIZE};
use super::kind::{ScalarKind, TypeTag};
use crate::error::{CodecError, Result};

/// Length of a packed boolean array of `count` elements, prefix included
pub const fn packed_bool_len(count: usize) -> usize {
    BOOL_ARRAY_COUNT_SIZE + count.div_ceil(BITS_PER_BYTE)
}

/// Exact buffer length needed to encode `count` elements as `tag`
///
/// `count` is ignored for scalar targets. Boxed arrays share the layout of
/// plain arrays.
pub const fn encoded_len(tag: TypeTag, count: usize) -> Result<usize> {
    match tag {
        TypeTag::Scalar(kind) => Ok(kind.width()),
        TypeTag::Array(ScalarKind::Bool) | TypeTag::BoxedArray(ScalarKind::Bool) => {
            Ok(packed_bool_len(count))
        }
        TypeTag::Array(kind) | TypeTag::BoxedArray(kind) => match count.checked_mul(kind.width()) {
            Some(len) => Ok(len),
            None => Err(CodecError::ArraySizeOverflow),
        },
    }
}
