//! Scriptbuf - binary buffer values for an embedded scripting runtime
//!
//! Script code works with two value shapes: an owned, fixed-size byte
//! buffer, and a lightweight slice that views a region of a buffer without
//! copying it. Storage is allocated once and shared; every derived slice
//! keeps the root buffer alive, and a slice of a slice collapses to a single
//! view with an accumulated offset. For I/O, any buffer-like value coerces
//! to a raw `(pointer, length)` descriptor so reads and writes touch the
//! storage directly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       SCRIPT SURFACE                         │
//! │  BufferLike: Owned(Buffer) | View(Slice) | Bytes(Vec<u8>)    │
//! │  get / slice / materialize / describe / decode / encode      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Buffer: Arc-shared fixed storage, freed with last holder    │
//! │  Slice:  root buffer + start + length, flattened on derive   │
//! ├──────────────────────────────────────────────────────────────┤
//! │  RawView: (ptr, len) + keep-alive handle, for zero-copy I/O  │
//! │  PinTable: refs for buffers with reads in flight             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use scriptbuf::{Buffer, BufferLike};
//!
//! let buf = Buffer::create_from(b"hello world");
//! let word = buf.slice(0, 5).unwrap();
//! assert_eq!(word.materialize(), b"hello");
//!
//! // Whole-range slicing hands back the buffer itself.
//! let same = buf.slice(0, 10).unwrap();
//! match same {
//!     BufferLike::Owned(b) => assert!(b.ptr_eq(&buf)),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Single cooperative script context assumed: nothing here suspends or
//! locks, and the I/O scheduler is responsible for not writing a buffer
//! that is concurrently being read.

#![warn(clippy::all)]

pub mod buffer;
pub mod codec;
pub mod error;
pub mod raw;
pub mod registry;
pub mod slice;
pub mod value;

pub use buffer::Buffer;
pub use codec::{Codec, Passthrough};
pub use error::{BufferError, BufferResult, ErrorKind};
pub use raw::RawView;
pub use registry::{PinRef, PinTable, DEFAULT_PREPARE_SIZE};
pub use slice::Slice;
pub use value::{BufferLike, BufferProp, SliceProp};
