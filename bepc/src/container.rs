//! Typed views over an owned byte buffer
//!
//! [`TypedBuffer`] owns exactly one encoded buffer and reads it back as
//! whatever scalar, array or boxed array the caller asks for. The buffer is
//! never validated up front: every read checks the length it needs.
//!
//! A scalar `bool` is stored as one byte while a `bool` array is stored
//! count-prefixed and bit-packed. Reading one layout as the other does not
//! convert between them:
//!
//! ```
//! use bepc::TypedBuffer;
//!
//! let flag = TypedBuffer::new(&true).unwrap();
//! assert_eq!(flag.as_bytes(), &[0x01]);
//! assert!(flag.get::<Vec<bool>>().is_err());
//!
//! let flags = TypedBuffer::new(&[true, false, true]).unwrap();
//! assert_eq!(flags.as_bytes(), &[0x00, 0x03, 0xa0]);
//! assert_eq!(flags.get::<bool>().unwrap(), false);
//! ```

use bepc_core::{parse_type_tag, ByteSource, Decode, Encode, Result, TypeTag, Value};
use log::{debug, trace};

/// Owned byte buffer with typed conversions
///
/// Mutation goes through `&mut self`, so a single buffer is never written
/// from two threads at once without the caller's own synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypedBuffer {
    bytes: Vec<u8>,
}

impl TypedBuffer {
    /// Adopt `bytes` as the backing buffer without copying or validating it
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encode `value` into a new buffer of exactly the needed length
    pub fn new<T: Encode + ?Sized>(value: &T) -> Result<Self> {
        let bytes = value.encode()?;
        trace!("encoded {} into {} bytes", value.type_tag(), bytes.len());
        Ok(Self { bytes })
    }

    /// Replace the buffer with the encoding of `value`
    ///
    /// On error the current buffer is kept unchanged.
    pub fn set<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let bytes = value.encode()?;
        debug!(
            "replacing {} byte buffer with {} ({} bytes)",
            self.bytes.len(),
            value.type_tag(),
            bytes.len()
        );
        self.bytes = bytes;
        Ok(())
    }

    /// Replace the buffer with `bytes`, returning the previous buffer
    pub fn replace_bytes(&mut self, bytes: Vec<u8>) -> Vec<u8> {
        debug!(
            "replacing {} byte buffer with raw {} bytes",
            self.bytes.len(),
            bytes.len()
        );
        std::mem::replace(&mut self.bytes, bytes)
    }

    /// Decode the buffer as a statically known type
    pub fn get<T: Decode>(&self) -> Result<T> {
        trace!("decoding {} bytes as {}", self.bytes.len(), T::TYPE_TAG);
        T::decode(&self.bytes)
    }

    /// Decode the buffer as `tag`
    pub fn as_type(&self, tag: TypeTag) -> Result<Value> {
        trace!("decoding {} bytes as {}", self.bytes.len(), tag);
        Value::decode(&self.bytes, tag)
    }

    /// Decode the buffer as the target with one-byte code `code`
    pub fn as_type_code(&self, code: u8) -> Result<Value> {
        self.as_type(TypeTag::from_code(code)?)
    }

    /// Decode the buffer as the target named `name`, e.g. `"i32[]"`
    pub fn as_type_name(&self, name: &str) -> Result<Value> {
        self.as_type(parse_type_tag(name)?)
    }

    /// Borrow the backing buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up the backing buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length of the backing buffer in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the backing buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for TypedBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<TypedBuffer> for Vec<u8> {
    fn from(buffer: TypedBuffer) -> Self {
        buffer.into_bytes()
    }
}

impl AsRef<[u8]> for TypedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl ByteSource for TypedBuffer {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
