//! End-to-end tests for TypedBuffer over the public API

use bepc::{
    decode_scalar, encode_scalar_into, read_buffer, write_buffer, CodecError, ErrorCategory,
    ScalarKind, TypeTag, TypedBuffer, Value,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x00be_0bc0)
}

#[test]
fn random_scalars_round_trip() {
    let mut rng = rng();
    for _ in 0..200 {
        let a: i8 = rng.gen();
        let b: i16 = rng.gen();
        let c: i32 = rng.gen();
        let d: i64 = rng.gen();
        let e: f32 = rng.gen_range(-1.0e6..1.0e6);
        let f: f64 = rng.gen_range(-1.0e12..1.0e12);
        let g: bool = rng.gen();
        let h: u16 = rng.gen();

        assert_eq!(TypedBuffer::new(&a).unwrap().get::<i8>().unwrap(), a);
        assert_eq!(TypedBuffer::new(&b).unwrap().get::<i16>().unwrap(), b);
        assert_eq!(TypedBuffer::new(&c).unwrap().get::<i32>().unwrap(), c);
        assert_eq!(TypedBuffer::new(&d).unwrap().get::<i64>().unwrap(), d);
        assert_eq!(TypedBuffer::new(&e).unwrap().get::<f32>().unwrap(), e);
        assert_eq!(TypedBuffer::new(&f).unwrap().get::<f64>().unwrap(), f);
        assert_eq!(TypedBuffer::new(&g).unwrap().get::<bool>().unwrap(), g);
        assert_eq!(TypedBuffer::new(&h).unwrap().get::<u16>().unwrap(), h);
    }
}

#[test]
fn random_arrays_round_trip() {
    let mut rng = rng();
    for _ in 0..50 {
        let len = rng.gen_range(0..300usize);

        let ints: Vec<i32> = (0..len).map(|_| rng.gen()).collect();
        let buffer = TypedBuffer::new(&ints).unwrap();
        assert_eq!(buffer.len(), len * 4);
        assert_eq!(buffer.get::<Vec<i32>>().unwrap(), ints);

        let longs: Vec<i64> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(
            TypedBuffer::new(&longs).unwrap().get::<Vec<i64>>().unwrap(),
            longs
        );

        let doubles: Vec<f64> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(
            TypedBuffer::new(&doubles).unwrap().get::<Vec<f64>>().unwrap(),
            doubles
        );

        let chars: Vec<u16> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(
            TypedBuffer::new(&chars).unwrap().get::<Vec<u16>>().unwrap(),
            chars
        );
    }
}

#[test]
fn random_bool_arrays_round_trip() {
    let mut rng = rng();
    for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 1000, 32767] {
        let flags: Vec<bool> = (0..len).map(|_| rng.gen()).collect();
        let buffer = TypedBuffer::new(&flags).unwrap();

        assert_eq!(buffer.len(), 2 + len.div_ceil(8));
        assert_eq!(&buffer.as_bytes()[..2], &(len as u16).to_be_bytes());
        assert_eq!(buffer.get::<Vec<bool>>().unwrap(), flags);
    }
}

#[test]
fn minus_one_reads_as_any_narrower_width() {
    let buffer = TypedBuffer::new(&-1i64).unwrap();
    assert_eq!(buffer.as_bytes(), &[0xff; 8]);
    assert_eq!(buffer.get::<i8>().unwrap(), -1);
    assert_eq!(buffer.get::<i16>().unwrap(), -1);
    assert_eq!(buffer.get::<i32>().unwrap(), -1);
    assert_eq!(buffer.get::<Vec<i32>>().unwrap(), vec![-1, -1]);
    assert_eq!(buffer.get::<Vec<i8>>().unwrap(), vec![-1; 8]);
}

#[test]
fn packed_flags_layout() {
    let buffer = TypedBuffer::new(&[true, false, true]).unwrap();
    assert_eq!(buffer.as_bytes(), &[0x00, 0x03, 0xa0]);

    // Garbage in the padding bits does not change the decoded flags
    let dirty = TypedBuffer::from_bytes(vec![0x00, 0x03, 0xbf]);
    assert_eq!(dirty.get::<Vec<bool>>().unwrap(), vec![true, false, true]);
}

#[test]
fn oversized_bool_array_is_rejected() {
    let flags = vec![false; 32768];
    let err = TypedBuffer::new(&flags).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);

    // A count prefix above the limit is rejected on decode too
    let forged = TypedBuffer::from_bytes(vec![0x80, 0x00]);
    assert_eq!(
        forged.get::<Vec<bool>>().unwrap_err(),
        CodecError::ArrayTooLong {
            len: 32768,
            max: 32767
        }
    );
}

#[test]
fn short_buffers_fail_with_out_of_range() {
    let buffer = TypedBuffer::from_bytes(vec![0x01, 0x02, 0x03]);
    for tag in ["i32", "i64", "f32", "f64"] {
        let err = buffer.as_type_name(tag).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::OutOfRange, "{tag}");
    }

    // Count claims 9 flags but only one packed byte follows
    let truncated = TypedBuffer::from_bytes(vec![0x00, 0x09, 0xff]);
    assert_eq!(
        truncated.get::<Vec<bool>>().unwrap_err().category(),
        ErrorCategory::OutOfRange
    );
}

#[test]
fn misaligned_arrays_fail_with_invalid_argument() {
    let buffer = TypedBuffer::from_bytes(vec![0; 6]);
    assert!(buffer.get::<Vec<i16>>().is_ok());
    assert_eq!(
        buffer.get::<Vec<i32>>().unwrap_err(),
        CodecError::ArrayAlignment {
            byte_len: 6,
            width: 4
        }
    );
    assert_eq!(
        buffer
            .as_type(TypeTag::BoxedArray(ScalarKind::Int64))
            .unwrap_err()
            .category(),
        ErrorCategory::InvalidArgument
    );
}

#[test]
fn boxed_arrays_share_the_plain_layout() {
    let plain = TypedBuffer::new(&[3i16, 0, -3]).unwrap();
    let boxed = TypedBuffer::new(&vec![Some(3i16), None, Some(-3)]).unwrap();
    assert_eq!(plain, boxed);

    assert_eq!(
        boxed.as_type_name("short?[]").unwrap(),
        Value::BoxedI16Array(vec![Some(3), Some(0), Some(-3)])
    );
}

#[test]
fn writes_into_caller_buffers_at_offsets() {
    let mut record = [0u8; 14];
    encode_scalar_into(0x0102_0304i32, &mut record, 0).unwrap();
    encode_scalar_into(-2i64, &mut record, 4).unwrap();
    encode_scalar_into(0x41u16, &mut record, 12).unwrap();

    assert_eq!(&record[..4], &[1, 2, 3, 4]);
    assert_eq!(decode_scalar::<i64>(&record, 4).unwrap(), -2);
    assert_eq!(decode_scalar::<u16>(&record, 12).unwrap(), 0x41);

    assert!(encode_scalar_into(1i32, &mut record, 12).is_err());
    assert_eq!(record[12..], [0x00, 0x41]);
}

#[test]
fn persisted_buffers_reload_identically() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = rng();

    let samples: Vec<f32> = (0..4096).map(|_| rng.gen()).collect();
    let buffer = TypedBuffer::new(&samples).unwrap();

    let path = dir.path().join("samples.bepc");
    write_buffer(&path, &buffer).unwrap();
    let loaded = read_buffer(&path).unwrap();

    assert_eq!(loaded.as_bytes(), buffer.as_bytes());
    assert_eq!(loaded.get::<Vec<f32>>().unwrap(), samples);
}

#[test]
fn every_type_code_parses_back() {
    for kind in ScalarKind::ALL {
        for tag in [
            TypeTag::Scalar(kind),
            TypeTag::Array(kind),
            TypeTag::BoxedArray(kind),
        ] {
            assert_eq!(TypeTag::from_code(tag.to_code()).unwrap(), tag);
            assert_eq!(tag.to_string().parse::<TypeTag>().unwrap(), tag);
        }
    }
}
