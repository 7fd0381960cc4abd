//! Tagged buffer-like values and the shared slicing algorithm.
//!
//! Script call sites hand buffers, slices, and plain byte sequences to the
//! same operations. [`BufferLike`] is the tagged shape for those arguments;
//! slicing and coercion dispatch on it explicitly instead of probing
//! runtime types.

use std::fmt;

use crate::buffer::Buffer;
use crate::error::{BufferError, BufferResult};
use crate::slice::Slice;

/// The shapes a buffer-taking script call can receive.
#[derive(Clone, Debug)]
pub enum BufferLike {
    /// An owned buffer.
    Owned(Buffer),
    /// A view into an owned buffer.
    View(Slice),
    /// An independent byte sequence from the host, e.g. a script string.
    Bytes(Vec<u8>),
}

impl BufferLike {
    /// Narrow a host argument to a buffer-like value.
    ///
    /// The host glue passes `None` when its dynamic value has no byte
    /// shape; the error names the host-side type for the script author.
    pub fn expect(value: Option<BufferLike>, type_name: &str) -> BufferResult<BufferLike> {
        value.ok_or_else(|| BufferError::NotBufferLike {
            type_name: type_name.to_string(),
        })
    }

    /// Effective length of the value in bytes.
    pub fn len(&self) -> usize {
        match self {
            BufferLike::Owned(b) => b.len(),
            BufferLike::View(s) => s.len(),
            BufferLike::Bytes(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one byte. The valid range is `[0, len)` for every shape.
    pub fn get(&self, index: i64) -> BufferResult<u8> {
        match self {
            BufferLike::Owned(b) => b.get(index),
            BufferLike::View(s) => s.get(index),
            BufferLike::Bytes(v) => {
                if index < 0 {
                    return Err(BufferError::IndexTooLow { index });
                }
                if index as usize >= v.len() {
                    return Err(BufferError::IndexTooHigh {
                        index,
                        len: v.len(),
                    });
                }
                Ok(v[index as usize])
            }
        }
    }

    /// Copy the viewed or owned region into an independent byte vector.
    pub fn materialize(&self) -> Vec<u8> {
        match self {
            BufferLike::Owned(b) => b.materialize(),
            BufferLike::View(s) => s.materialize(),
            BufferLike::Bytes(v) => v.clone(),
        }
    }

    /// Derive a sub-view covering `[start, end)` after normalization.
    ///
    /// Negative indices count back from the effective length. `end` is
    /// validated as an inclusive index, but the produced length is
    /// `end - start`: the byte at `end` itself is excluded. When the
    /// requested range covers the whole source, the source value itself is
    /// returned and no slice is allocated.
    ///
    /// Slicing a view flattens: the result references the root buffer with
    /// the offsets accumulated, never the intermediate view.
    pub fn slice(&self, start_in: i64, end_in: i64) -> BufferResult<BufferLike> {
        let (root, effective_start, effective_len) = match self {
            BufferLike::Owned(b) => (b, 0, b.len()),
            BufferLike::View(s) => (s.raw(), s.start(), s.len()),
            BufferLike::Bytes(_) => return Err(BufferError::NotSliceable),
        };
        let len = effective_len as i64;

        let start = if start_in < 0 { start_in + len } else { start_in };
        if start < 0 {
            return Err(BufferError::StartTooLow {
                start: start_in,
                len: effective_len,
            });
        }
        let end = if end_in < 0 { end_in + len } else { end_in };
        if end < 0 {
            return Err(BufferError::EndTooLow {
                end: end_in,
                len: effective_len,
            });
        }
        if end < start {
            return Err(BufferError::EndBeforeStart { start, end });
        }
        if end >= len {
            return Err(BufferError::EndTooHigh {
                end,
                len: effective_len,
            });
        }

        // Whole range: hand back the source itself, no allocation.
        if start == 0 && end == len - 1 {
            return Ok(self.clone());
        }

        Ok(BufferLike::View(Slice::new(
            root.clone(),
            effective_start + start as usize,
            (end - start) as usize,
        )))
    }

    /// Human-readable description of the value.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BufferLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferLike::Owned(b) => b.fmt(f),
            BufferLike::View(s) => s.fmt(f),
            BufferLike::Bytes(v) => write!(f, "<bytes {}>", v.len()),
        }
    }
}

impl From<Buffer> for BufferLike {
    fn from(buffer: Buffer) -> Self {
        BufferLike::Owned(buffer)
    }
}

impl From<Slice> for BufferLike {
    fn from(slice: Slice) -> Self {
        BufferLike::View(slice)
    }
}

impl From<Vec<u8>> for BufferLike {
    fn from(bytes: Vec<u8>) -> Self {
        BufferLike::Bytes(bytes)
    }
}

impl From<&[u8]> for BufferLike {
    fn from(bytes: &[u8]) -> Self {
        BufferLike::Bytes(bytes.to_vec())
    }
}

/// Properties a script can resolve on a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferProp {
    /// Derive a sub-view.
    Slice,
    /// Decode the contents through the text codec.
    Decode,
}

impl BufferProp {
    /// Unknown names resolve to `None`; the host surfaces nil for buffers.
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "slice" => Some(BufferProp::Slice),
            "decode" => Some(BufferProp::Decode),
            _ => None,
        }
    }
}

/// Properties a script can resolve on a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceProp {
    /// Derive a sub-view.
    Slice,
    /// Encode the viewed region through the text codec.
    Encode,
}

impl SliceProp {
    /// Slices reject unknown names instead of surfacing nil.
    pub fn resolve(name: &str) -> BufferResult<Self> {
        match name {
            "slice" => Ok(SliceProp::Slice),
            "encode" => Ok(SliceProp::Encode),
            other => Err(BufferError::UnknownProperty {
                name: other.to_string(),
            }),
        }
    }
}
