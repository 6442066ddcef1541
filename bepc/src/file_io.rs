//! File persistence for encoded buffers
//!
//! A file holds exactly the encoded bytes of one value, with no header. The
//! reader must know the type to decode it as.
//!
//! [`read_buffer`] copies the file into an owned [`TypedBuffer`]. With the
//! `mmap` feature, [`map_buffer`] instead keeps a read-only mapping of the
//! file and decodes straight out of it.

use std::path::Path;

use bepc_core::ByteSource;
use log::debug;

use crate::container::TypedBuffer;
use crate::error::Result;

#[cfg(feature = "mmap")]
use bepc_core::{Decode, TypeTag, Value};
#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};

/// Write the encoded bytes of `source` to `path`, replacing any existing file
pub fn write_buffer<P, S>(path: P, source: &S) -> Result<()>
where
    P: AsRef<Path>,
    S: ByteSource + ?Sized,
{
    let path = path.as_ref();
    std::fs::write(path, source.as_bytes())?;
    debug!("wrote {} bytes to {}", source.size(), path.display());
    Ok(())
}

/// Read the whole of `path` into an owned buffer
pub fn read_buffer<P: AsRef<Path>>(path: P) -> Result<TypedBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(TypedBuffer::from_bytes(bytes))
}

/// Read-only view of an encoded file, backed by a memory mapping
///
/// Typed reads decode directly from the mapped pages. The file must not be
/// truncated by another process while the mapping is alive.
#[cfg(feature = "mmap")]
#[derive(Debug)]
pub struct MappedBuffer {
    // None for empty files, which cannot be mapped on every platform
    mmap: Option<Mmap>,
}

/// Map `path` read-only without copying it
#[cfg(feature = "mmap")]
pub fn map_buffer<P: AsRef<Path>>(path: P) -> Result<MappedBuffer> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;

    if file.metadata()?.len() == 0 {
        debug!("mapped empty file {}", path.display());
        return Ok(MappedBuffer { mmap: None });
    }

    // SAFETY: read-only mapping; the returned view owns it and never hands
    // out slices that outlive it
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    debug!("mapped {} bytes from {}", mmap.len(), path.display());

    Ok(MappedBuffer { mmap: Some(mmap) })
}

#[cfg(feature = "mmap")]
impl MappedBuffer {
    /// Decode the mapping as a statically known type
    pub fn get<T: Decode>(&self) -> bepc_core::Result<T> {
        T::decode(self.as_bytes())
    }

    /// Decode the mapping as `tag`
    pub fn as_type(&self, tag: TypeTag) -> bepc_core::Result<Value> {
        Value::decode(self.as_bytes(), tag)
    }

    /// Copy the mapped bytes into an owned buffer
    pub fn to_typed_buffer(&self) -> TypedBuffer {
        TypedBuffer::from_bytes(self.as_bytes().to_vec())
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

#[cfg(feature = "mmap")]
impl ByteSource for MappedBuffer {
    fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

#[cfg(feature = "mmap")]
impl AsRef<[u8]> for MappedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
