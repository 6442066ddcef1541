//! Scalar type constraints for the BEPC format
//!
//! This module defines the trait implemented by every Rust type that maps
//! onto one of the eight [`ScalarKind`]s.

use byteorder::{BigEndian, ByteOrder};

use crate::format::ScalarKind;

/// Trait for types that can be stored as a fixed-width scalar
///
/// All scalar types must be:
/// - Copy: Can be copied without allocation
/// - Default: The default value is the kind's zero value, used when
///   unboxing a missing element
/// - PartialEq + Debug: Can be compared and reported in tests
///
/// UTF-16 code units are represented as `u16`.
pub trait Primitive: Copy + Default + PartialEq + core::fmt::Debug + Sized + 'static {
    /// Wire kind of this type
    const KIND: ScalarKind;

    /// Size in bytes of one encoded value
    const WIDTH: usize = Self::KIND.width();

    /// Write the big-endian encoding into the first `WIDTH` bytes of `dest`
    ///
    /// # Panics
    /// If `dest` is shorter than `WIDTH`. Use
    /// [`encode_scalar_into`](crate::codec::encode_scalar_into) for a
    /// checked write.
    fn write_be(self, dest: &mut [u8]);

    /// Read a value from the first `WIDTH` bytes of `src`
    ///
    /// # Panics
    /// If `src` is shorter than `WIDTH`. Use
    /// [`decode_scalar`](crate::codec::decode_scalar) for a checked read.
    fn read_be(src: &[u8]) -> Self;
}

/// Macro to implement Primitive for integer types backed by byteorder
macro_rules! impl_integer_primitive {
    ($type:ty, $kind:ident, $read:ident, $write:ident) => {
        impl Primitive for $type {
            const KIND: ScalarKind = ScalarKind::$kind;

            #[inline]
            fn write_be(self, dest: &mut [u8]) {
                BigEndian::$write(dest, self);
            }

            #[inline]
            fn read_be(src: &[u8]) -> Self {
                BigEndian::$read(src)
            }
        }
    };
}

/// Macro to implement Primitive for float types through their bit pattern
macro_rules! impl_float_primitive {
    ($type:ty, $kind:ident, $read:ident, $write:ident) => {
        impl Primitive for $type {
            const KIND: ScalarKind = ScalarKind::$kind;

            #[inline]
            fn write_be(self, dest: &mut [u8]) {
                BigEndian::$write(dest, self.to_bits());
            }

            #[inline]
            fn read_be(src: &[u8]) -> Self {
                <$type>::from_bits(BigEndian::$read(src))
            }
        }
    };
}

impl_integer_primitive!(i16, Int16, read_i16, write_i16);
impl_integer_primitive!(i32, Int32, read_i32, write_i32);
impl_integer_primitive!(i64, Int64, read_i64, write_i64);
impl_integer_primitive!(u16, Char16, read_u16, write_u16);
impl_float_primitive!(f32, Float32, read_u32, write_u32);
impl_float_primitive!(f64, Float64, read_u64, write_u64);

impl Primitive for i8 {
    const KIND: ScalarKind = ScalarKind::Int8;

    #[inline]
    fn write_be(self, dest: &mut [u8]) {
        dest[0] = self as u8;
    }

    #[inline]
    fn read_be(src: &[u8]) -> Self {
        src[0] as i8
    }
}

impl Primitive for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    #[inline]
    fn write_be(self, dest: &mut [u8]) {
        dest[0] = u8::from(self);
    }

    /// Any nonzero byte is true
    #[inline]
    fn read_be(src: &[u8]) -> Self {
        src[0] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_match_kinds() {
        assert_eq!(<i8 as Primitive>::WIDTH, 1);
        assert_eq!(<i16 as Primitive>::WIDTH, 2);
        assert_eq!(<i32 as Primitive>::WIDTH, 4);
        assert_eq!(<i64 as Primitive>::WIDTH, 8);
        assert_eq!(<f32 as Primitive>::WIDTH, 4);
        assert_eq!(<f64 as Primitive>::WIDTH, 8);
        assert_eq!(<bool as Primitive>::WIDTH, 1);
        assert_eq!(<u16 as Primitive>::WIDTH, 2);
    }

    #[test]
    fn test_big_endian_layout() {
        let mut buf = [0u8; 8];

        0x0102_0304i32.write_be(&mut buf);
        assert_eq!(&buf[..4], &[0x01, 0x02, 0x03, 0x04]);

        (-2i16).write_be(&mut buf);
        assert_eq!(&buf[..2], &[0xff, 0xfe]);

        1.0f64.write_be(&mut buf);
        assert_eq!(buf, [0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);

        0x00e9u16.write_be(&mut buf);
        assert_eq!(&buf[..2], &[0x00, 0xe9]);
    }

    #[test]
    fn test_no_sign_extension() {
        // High bit set in every byte
        let bytes = [0x80, 0xff, 0x80, 0xff];
        assert_eq!(i32::read_be(&bytes), 0x80ff_80ffu32 as i32);
        assert_eq!(i16::read_be(&bytes), 0x80ffu16 as i16);
        assert_eq!(u16::read_be(&bytes[1..]), 0xff80);
    }

    #[test]
    fn test_bool_reads_any_nonzero() {
        assert!(!bool::read_be(&[0]));
        assert!(bool::read_be(&[1]));
        assert!(bool::read_be(&[0x40]));
        assert!(bool::read_be(&[0xff]));
    }
}
