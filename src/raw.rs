//! Raw `(pointer, length)` descriptors for zero-copy I/O.

use crate::buffer::Buffer;
use crate::error::{BufferError, BufferResult};
use crate::value::BufferLike;

/// Non-owning descriptor over a region of buffer storage.
///
/// A `RawView` is what the I/O layer receives for zero-copy reads and
/// writes: a base pointer and a length, plus the backing buffer handle that
/// keeps the storage alive for exactly as long as the view exists. Whoever
/// holds the view holds the keep-alive.
///
/// Writes through a view must not be concurrent with reads of the same
/// storage; enforcing that exclusion is the I/O scheduler's job.
pub struct RawView {
    backing: Buffer,
    offset: usize,
    len: usize,
}

impl RawView {
    /// Callers establish `offset + len <= backing.len()` before
    /// construction.
    pub(crate) fn over(backing: Buffer, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= backing.len());
        Self {
            backing,
            offset,
            len,
        }
    }

    /// Coerce any buffer-like value to a raw view.
    ///
    /// Owned buffers and views coerce without copying. A byte sequence is
    /// copied into a fresh buffer first, because the host's sequence
    /// storage is not guaranteed to outlive the I/O call; the new buffer
    /// then lives exactly as long as the returned view.
    pub fn coerce(value: BufferLike) -> RawView {
        match value {
            BufferLike::Owned(b) => b.raw_view(),
            BufferLike::View(s) => s.raw_view(),
            BufferLike::Bytes(v) => Buffer::create_from(&v).raw_view(),
        }
    }

    /// Base pointer of the viewed region.
    pub fn as_ptr(&self) -> *const u8 {
        // offset <= backing.len() since construction
        unsafe { self.backing.as_ptr().add(self.offset) }
    }

    /// Length of the viewed region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buffer keeping this view's storage alive.
    pub fn backing(&self) -> &Buffer {
        &self.backing
    }

    /// Read the viewed bytes.
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Write `data` into the view at `offset`, bounds-checked against the
    /// view length. The read-completion path uses this to fill prepared
    /// buffers.
    pub fn write(&self, offset: usize, data: &[u8]) -> BufferResult<usize> {
        if offset + data.len() > self.len {
            return Err(BufferError::OutOfBounds {
                offset,
                len: data.len(),
                cap: self.len,
            });
        }
        unsafe {
            let dest = self.backing.as_mut_ptr().add(self.offset + offset);
            std::ptr::copy_nonoverlapping(data.as_ptr(), dest, data.len());
        }
        Ok(data.len())
    }

    /// Write `data` at the start of the view.
    pub fn write_all(&self, data: &[u8]) -> BufferResult<usize> {
        self.write(0, data)
    }
}
