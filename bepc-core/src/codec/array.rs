//! Whole-array encoding
//!
//! Non-boolean arrays are the plain concatenation of each element's
//! big-endian encoding with no header. `i8` arrays are the bytes
//! themselves. Boolean arrays use the count-prefixed bit-packed layout
//! from [`bits`](super::bits).

use alloc::{vec, vec::Vec};

use crate::error::{CodecError, Result};
use crate::traits::Primitive;
use crate::validation::validate_array_bounds;

/// Scalar types that have an array layout
pub trait ArrayCodec: Primitive {
    /// Encode `values` into a freshly allocated buffer
    fn encode_array(values: &[Self]) -> Result<Vec<u8>>;

    /// Decode an entire buffer into values
    fn decode_array(bytes: &[u8]) -> Result<Vec<Self>>;
}

/// Encode an array of scalars
pub fn encode_array<T: ArrayCodec>(values: &[T]) -> Result<Vec<u8>> {
    T::encode_array(values)
}

/// Decode an array of scalars from the whole of `bytes`
pub fn decode_array<T: ArrayCodec>(bytes: &[u8]) -> Result<Vec<T>> {
    T::decode_array(bytes)
}

/// Concatenate fixed-width encodings
fn encode_strided<T: Primitive>(values: &[T]) -> Result<Vec<u8>> {
    let len = values
        .len()
        .checked_mul(T::WIDTH)
        .ok_or(CodecError::ArraySizeOverflow)?;

    let mut bytes = vec![0u8; len];
    for (chunk, &value) in bytes.chunks_exact_mut(T::WIDTH).zip(values) {
        value.write_be(chunk);
    }
    Ok(bytes)
}

/// Split a buffer into fixed-width encodings
fn decode_strided<T: Primitive>(bytes: &[u8]) -> Result<Vec<T>> {
    let count = validate_array_bounds(bytes.len(), T::WIDTH)?;

    let mut values = Vec::with_capacity(count);
    values.extend(bytes.chunks_exact(T::WIDTH).map(T::read_be));
    Ok(values)
}

/// Macro to implement ArrayCodec with the strided layout
macro_rules! impl_strided_array_codec {
    ($($type:ty),* $(,)?) => {
        $(
            impl ArrayCodec for $type {
                fn encode_array(values: &[Self]) -> Result<Vec<u8>> {
                    encode_strided(values)
                }

                fn decode_array(bytes: &[u8]) -> Result<Vec<Self>> {
                    decode_strided(bytes)
                }
            }
        )*
    };
}

impl_strided_array_codec!(i16, i32, i64, f32, f64, u16);

/// Bytes are the storage unit: no transcoding beyond the sign reinterpretation
impl ArrayCodec for i8 {
    fn encode_array(values: &[Self]) -> Result<Vec<u8>> {
        Ok(values.iter().map(|&v| v as u8).collect())
    }

    fn decode_array(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(bytes.iter().map(|&b| b as i8).collect())
    }
}

impl ArrayCodec for bool {
    fn encode_array(values: &[Self]) -> Result<Vec<u8>> {
        super::bits::pack_bools(values)
    }

    fn decode_array(bytes: &[u8]) -> Result<Vec<Self>> {
        super::bits::unpack_bools(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arrays() {
        let bytes = encode_array(&[1i32, -1, 0x0a0b0c0d]).unwrap();
        assert_eq!(
            bytes,
            [0, 0, 0, 1, 0xff, 0xff, 0xff, 0xff, 0x0a, 0x0b, 0x0c, 0x0d]
        );
        assert_eq!(decode_array::<i32>(&bytes), Ok(vec![1, -1, 0x0a0b0c0d]));

        let shorts = [i16::MIN, -1, 0, 1, i16::MAX];
        let bytes = encode_array(&shorts).unwrap();
        assert_eq!(bytes.len(), 10);
        assert_eq!(decode_array::<i16>(&bytes).unwrap(), shorts);

        let longs = [i64::MIN, 42, i64::MAX];
        let bytes = encode_array(&longs).unwrap();
        assert_eq!(bytes.len(), 24);
        assert_eq!(decode_array::<i64>(&bytes).unwrap(), longs);
    }

    #[test]
    fn test_float_arrays() {
        let floats = [0.0f32, -0.0, 3.25, f32::MAX];
        let back = decode_array::<f32>(&encode_array(&floats).unwrap()).unwrap();
        for (a, b) in floats.iter().zip(&back) {
            assert_eq!(a.to_bits(), b.to_bits());
        }

        let doubles = [f64::MIN, 1e-300, 2.5];
        let bytes = encode_array(&doubles).unwrap();
        assert_eq!(&bytes[16..24], &2.5f64.to_bits().to_be_bytes());
        assert_eq!(decode_array::<f64>(&bytes).unwrap(), doubles);
    }

    #[test]
    fn test_char_arrays() {
        let units: Vec<u16> = "héllo\u{1F600}".encode_utf16().collect();
        let bytes = encode_array(&units).unwrap();
        assert_eq!(&bytes[..4], &[0x00, 0x68, 0x00, 0xe9]);
        assert_eq!(decode_array::<u16>(&bytes).unwrap(), units);
    }

    #[test]
    fn test_byte_arrays_pass_through() {
        let raw = [0x00u8, 0x7f, 0x80, 0xff, 0x05];
        let values = decode_array::<i8>(&raw).unwrap();
        assert_eq!(values, vec![0, 127, -128, -1, 5]);
        assert_eq!(encode_array(&values).unwrap(), raw);
    }

    #[test]
    fn test_misaligned_buffers() {
        assert_eq!(
            decode_array::<i16>(&[0, 1, 2]),
            Err(CodecError::ArrayAlignment {
                byte_len: 3,
                width: 2
            })
        );
        assert_eq!(
            decode_array::<i32>(&[0; 6]),
            Err(CodecError::ArrayAlignment {
                byte_len: 6,
                width: 4
            })
        );
        assert_eq!(
            decode_array::<f64>(&[0; 12]),
            Err(CodecError::ArrayAlignment {
                byte_len: 12,
                width: 8
            })
        );
        assert!(decode_array::<u16>(&[0]).is_err());
    }

    #[test]
    fn test_empty_arrays() {
        assert_eq!(encode_array::<i32>(&[]), Ok(vec![]));
        assert_eq!(decode_array::<i64>(&[]), Ok(vec![]));
        assert_eq!(decode_array::<i8>(&[]), Ok(vec![]));
    }

    #[test]
    fn test_bytes_round_trip_exactly() {
        let raw: Vec<u8> = (0u8..=255).collect();
        for reencoded in [
            encode_array(&decode_array::<i16>(&raw).unwrap()),
            encode_array(&decode_array::<i32>(&raw).unwrap()),
            encode_array(&decode_array::<i64>(&raw).unwrap()),
            encode_array(&decode_array::<u16>(&raw).unwrap()),
        ] {
            assert_eq!(reencoded.unwrap(), raw);
        }
    }
}
