//! Format constants for the BEPC wire layout

/// Bits stored in each byte of a packed boolean array
pub const BITS_PER_BYTE: usize = 8;

/// Size of the big-endian element count that prefixes a packed boolean array
pub const BOOL_ARRAY_COUNT_SIZE: usize = 2;

/// Largest boolean array the 2-byte count prefix may describe
pub const MAX_BOOL_ARRAY_LEN: usize = i16::MAX as usize;

/// Mask applied to the first element of each packed byte (MSB first)
pub const BOOL_ARRAY_FIRST_BIT: u8 = 0x80;

/// Shape nibbles of a one-byte type code
pub mod shape {
    /// Single scalar value
    pub const SCALAR: u8 = 0x00;
    /// Array of scalars
    pub const ARRAY: u8 = 0x10;
    /// Array of nullable scalars
    pub const BOXED_ARRAY: u8 = 0x20;
    /// Mask selecting the shape nibble
    pub const MASK: u8 = 0xf0;
}

/// Mask selecting the kind nibble of a one-byte type code
pub const KIND_MASK: u8 = 0x0f;
