//! Byte storage abstraction

/// Anything that exposes an encoded byte buffer
pub trait ByteSource {
    /// Get a slice of the underlying data
    fn as_bytes(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_bytes().len()
    }
}

impl ByteSource for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

#[cfg(feature = "alloc")]
impl ByteSource for alloc::vec::Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}
