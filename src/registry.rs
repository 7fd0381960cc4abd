//! Process-global pin table for buffers with I/O in flight.
//!
//! A read operation needs storage that stays alive from the moment it is
//! handed to the I/O layer until the completion path recovers it. Pinning
//! stores the buffer under a stable integer ref; unpinning releases the
//! keep-alive once the completion has run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::buffer::Buffer;
use crate::raw::RawView;

/// Stable reference to a pinned buffer.
pub type PinRef = u64;

/// Default allocation for a prepared read buffer (64 KiB).
pub const DEFAULT_PREPARE_SIZE: usize = 64 * 1024;

static NEXT_REF: AtomicU64 = AtomicU64::new(1);

fn next_ref() -> PinRef {
    NEXT_REF.fetch_add(1, Ordering::Relaxed)
}

lazy_static::lazy_static! {
    /// Buffers kept alive while the I/O layer holds their raw views.
    static ref PINNED: RwLock<HashMap<PinRef, Buffer>> = RwLock::new(HashMap::new());
}

/// The global pin table.
pub struct PinTable;

impl PinTable {
    /// Pin `buffer` and return the ref that recovers it later.
    pub fn pin(buffer: Buffer) -> PinRef {
        let r = next_ref();
        let mut table = PINNED.write().unwrap();
        table.insert(r, buffer);
        r
    }

    /// Release a pin, returning the buffer if the ref was live.
    pub fn unpin(r: PinRef) -> Option<Buffer> {
        let mut table = PINNED.write().unwrap();
        table.remove(&r)
    }

    /// Run `f` against the pinned buffer without releasing it.
    pub fn with<F, R>(r: PinRef, f: F) -> Option<R>
    where
        F: FnOnce(&Buffer) -> R,
    {
        let table = PINNED.read().unwrap();
        table.get(&r).map(f)
    }

    /// Is the ref live?
    pub fn contains(r: PinRef) -> bool {
        let table = PINNED.read().unwrap();
        table.contains_key(&r)
    }

    /// Number of pinned buffers.
    pub fn count() -> usize {
        let table = PINNED.read().unwrap();
        table.len()
    }

    /// Drop every pin. Intended for runtime shutdown.
    pub fn clear() {
        let mut table = PINNED.write().unwrap();
        table.clear();
    }

    /// Allocate a zeroed buffer for an incoming read, pin it, and return
    /// the writable view plus the ref the completion path uses to recover
    /// the buffer.
    pub fn prepare(len: usize) -> (RawView, PinRef) {
        let buffer = Buffer::create(len);
        let view = buffer.raw_view();
        (view, Self::pin(buffer))
    }
}
