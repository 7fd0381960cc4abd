//! Zero-copy views over buffer storage.

use std::fmt;

use crate::buffer::Buffer;
use crate::codec::Codec;
use crate::error::{BufferError, BufferResult};
use crate::raw::RawView;
use crate::value::{BufferLike, SliceProp};

/// Non-owning view of a region of a [`Buffer`].
///
/// A slice always references the root buffer directly: deriving a slice
/// from a slice accumulates the offset instead of nesting views, so access
/// never chases a chain. Bounds are validated once, at construction;
/// because buffer length is fixed, the validation holds for the slice's
/// entire lifetime. The slice shares ownership of the storage, extending
/// its lifetime without copying it.
#[derive(Clone)]
pub struct Slice {
    raw: Buffer,
    start: usize,
    length: usize,
}

impl Slice {
    /// Callers establish `start + length <= raw.len()` before construction;
    /// the slicing algorithm is the only producer.
    pub(crate) fn new(raw: Buffer, start: usize, length: usize) -> Self {
        debug_assert!(start + length <= raw.len());
        Self { raw, start, length }
    }

    /// The root buffer this slice views.
    pub fn raw(&self) -> &Buffer {
        &self.raw
    }

    /// Byte offset into the root buffer.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of viewable bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Read one byte relative to the view.
    pub fn get(&self, index: i64) -> BufferResult<u8> {
        if index < 0 {
            return Err(BufferError::IndexTooLow { index });
        }
        if index as usize >= self.length {
            return Err(BufferError::IndexTooHigh {
                index,
                len: self.length,
            });
        }
        Ok(self.as_slice()[index as usize])
    }

    /// Copy the viewed region into an independent byte vector.
    ///
    /// The only copying operation on a slice. The view is live, not a
    /// snapshot: the copy reflects the backing storage at call time.
    pub fn materialize(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Encode the viewed region through `codec`.
    pub fn encode<C: Codec>(&self, codec: &C) -> BufferResult<Vec<u8>> {
        codec.encode(self.as_slice())
    }

    /// Derive a sub-view; offsets accumulate onto the root buffer.
    pub fn slice(&self, start: i64, end: i64) -> BufferResult<BufferLike> {
        BufferLike::View(self.clone()).slice(start, end)
    }

    /// Descriptor over the viewed region, `(raw.base + start, length)`.
    pub fn raw_view(&self) -> RawView {
        RawView::over(self.raw.clone(), self.start, self.length)
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.raw.as_slice()[self.start..self.start + self.length]
    }

    /// Resolve a script property name. Unlike buffers, slices reject
    /// unknown names with a lookup error.
    pub fn property(&self, name: &str) -> BufferResult<SliceProp> {
        SliceProp::resolve(name)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<slice {}:{} {}>", self.start, self.length, self.raw)
    }
}

impl fmt::Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("raw", &self.raw)
            .field("start", &self.start)
            .field("length", &self.length)
            .finish()
    }
}
