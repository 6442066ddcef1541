//! Error types for BEPC operations

/// Broad classes of codec failure
///
/// Every [`CodecError`] belongs to exactly one category. Callers that only
/// care about the class of failure can match on this instead of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input itself is malformed for the requested conversion
    InvalidArgument,
    /// Not enough bytes for the requested width at the requested offset
    OutOfRange,
    /// The requested conversion target is not a defined kind
    Unsupported,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorCategory::InvalidArgument => "invalid argument",
            ErrorCategory::OutOfRange => "out of range",
            ErrorCategory::Unsupported => "unsupported",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during BEPC operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer length is not a whole number of elements
    ArrayAlignment { byte_len: usize, width: usize },
    /// Array has more elements than its wire format can describe
    ArrayTooLong { len: usize, max: usize },
    /// Element count times width overflows `usize`
    ArraySizeOverflow,
    /// Fewer bytes remain after `offset` than the conversion needs
    InsufficientBytes {
        needed: usize,
        offset: usize,
        available: usize,
    },
    /// Type code outside the defined scalar, array and boxed array targets
    UnknownTypeCode(u8),
    /// Type name that does not denote any defined target
    UnknownTypeName,
}

impl CodecError {
    /// Category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CodecError::ArrayAlignment { .. }
            | CodecError::ArrayTooLong { .. }
            | CodecError::ArraySizeOverflow => ErrorCategory::InvalidArgument,
            CodecError::InsufficientBytes { .. } => ErrorCategory::OutOfRange,
            CodecError::UnknownTypeCode(_) | CodecError::UnknownTypeName => {
                ErrorCategory::Unsupported
            }
        }
    }
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::ArrayAlignment { byte_len, width } => write!(
                f,
                "buffer of {byte_len} bytes is not a multiple of the {width}-byte element width"
            ),
            CodecError::ArrayTooLong { len, max } => {
                write!(f, "array of {len} elements exceeds the maximum of {max}")
            }
            CodecError::ArraySizeOverflow => write!(f, "array size overflows usize"),
            CodecError::InsufficientBytes {
                needed,
                offset,
                available,
            } => write!(
                f,
                "{needed} bytes needed starting at {offset}, found {available}"
            ),
            CodecError::UnknownTypeCode(code) => write!(f, "unknown type code {code:#04x}"),
            CodecError::UnknownTypeName => write!(f, "unknown type name"),
        }
    }
}

impl core::error::Error for CodecError {}

/// Result type for BEPC operations
pub type Result<T> = core::result::Result<T, CodecError>;
