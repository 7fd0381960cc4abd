//! Owned buffer storage.
//!
//! A `Buffer` owns a fixed block of bytes. Cloning a `Buffer` shares the
//! storage instead of copying it; the block is freed when the last holder
//! (the buffer itself or any slice derived from it) is dropped.

use std::cell::UnsafeCell;
use std::fmt;
use std::sync::Arc;

use crate::codec::Codec;
use crate::error::{BufferError, BufferResult};
use crate::raw::RawView;
use crate::value::{BufferLike, BufferProp};

/// Backing storage shared by a [`Buffer`] and every [`crate::Slice`]
/// derived from it.
///
/// The cell lets the I/O layer fill a prepared buffer through a
/// [`RawView`] while script-visible handles to the same storage already
/// exist. The module itself never writes after construction; the I/O
/// scheduler must keep a writer exclusive with readers.
pub(crate) struct Storage {
    bytes: UnsafeCell<Box<[u8]>>,
}

// Storage crosses thread boundaries only behind the exclusion contract
// above; the runtime itself is single-context.
unsafe impl Send for Storage {}
unsafe impl Sync for Storage {}

impl Storage {
    fn new(bytes: Box<[u8]>) -> Self {
        Self {
            bytes: UnsafeCell::new(bytes),
        }
    }

    pub(crate) fn as_ptr(&self) -> *const u8 {
        unsafe { (*self.bytes.get()).as_ptr() }
    }

    pub(crate) fn as_mut_ptr(&self) -> *mut u8 {
        unsafe { (*self.bytes.get()).as_mut_ptr() }
    }
}

/// Owned, fixed-size, contiguous byte storage.
///
/// Length never changes after creation, so a bounds check done when a slice
/// is constructed stays valid for the slice's whole lifetime.
#[derive(Clone)]
pub struct Buffer {
    storage: Arc<Storage>,
    len: usize,
}

impl Buffer {
    /// Allocate `len` zeroed bytes. A zero-length buffer is legal.
    pub fn create(len: usize) -> Self {
        Self::from_boxed(vec![0u8; len].into_boxed_slice())
    }

    /// Allocate `bytes.len()` storage and copy `bytes` in. The result does
    /// not alias the input.
    pub fn create_from(bytes: &[u8]) -> Self {
        Self::from_boxed(bytes.to_vec().into_boxed_slice())
    }

    fn from_boxed(bytes: Box<[u8]>) -> Self {
        let len = bytes.len();
        Self {
            storage: Arc::new(Storage::new(bytes)),
            len,
        }
    }

    /// Size in bytes, fixed at creation.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read one byte. The valid range is `[0, len)` on both ends.
    pub fn get(&self, index: i64) -> BufferResult<u8> {
        if index < 0 {
            return Err(BufferError::IndexTooLow { index });
        }
        if index as usize >= self.len {
            return Err(BufferError::IndexTooHigh {
                index,
                len: self.len,
            });
        }
        Ok(self.as_slice()[index as usize])
    }

    /// Copy the full contents out as an independent byte vector.
    pub fn materialize(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Decode the contents through `codec`.
    pub fn decode<C: Codec>(&self, codec: &C) -> BufferResult<Vec<u8>> {
        codec.decode(self.as_slice())
    }

    /// Derive a sub-view covering `[start, end)` after normalization. The
    /// whole range hands back the buffer itself.
    pub fn slice(&self, start: i64, end: i64) -> BufferResult<BufferLike> {
        BufferLike::Owned(self.clone()).slice(start, end)
    }

    /// Descriptor over the entire storage. The view keeps the storage alive
    /// for as long as it is held.
    pub fn raw_view(&self) -> RawView {
        RawView::over(self.clone(), 0, self.len)
    }

    /// Do two handles share one storage block?
    pub fn ptr_eq(&self, other: &Buffer) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Address of the storage; the opaque identity shown by `Display`.
    pub fn as_ptr(&self) -> *const u8 {
        self.storage.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&self) -> *mut u8 {
        self.storage.as_mut_ptr()
    }

    /// Borrow the contents. Sound under the single-context model: the only
    /// writer is the I/O layer, which is never concurrent with a reader.
    pub(crate) fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Resolve a script property name. Unknown names yield `None` and the
    /// host surfaces nil.
    pub fn property(&self, name: &str) -> Option<BufferProp> {
        BufferProp::resolve(name)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<buffer {:p}:{}>", self.as_ptr(), self.len)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len)
            .finish()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_boxed(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::create_from(bytes)
    }
}
