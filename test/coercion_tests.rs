//! Raw-view coercion and pin-table tests.

use scriptbuf::{
    Buffer, BufferError, BufferLike, ErrorKind, PinTable, RawView, DEFAULT_PREPARE_SIZE,
};

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn test_buffer_coerces_to_whole_storage() {
    let buf = Buffer::create_from(b"0123456789");
    let view = RawView::coerce(BufferLike::Owned(buf.clone()));
    assert_eq!(view.as_ptr(), buf.as_ptr());
    assert_eq!(view.len(), buf.len());
}

#[test]
fn test_slice_coerces_to_offset_pointer() {
    // 5-byte slice at offset 2 of a 10-byte buffer
    let buf = Buffer::create_from(b"0123456789");
    let view = RawView::coerce(buf.slice(2, 7).unwrap());
    assert_eq!(view.as_ptr(), unsafe { buf.as_ptr().add(2) });
    assert_eq!(view.len(), 5);
    // no allocation performed: the backing is the original storage
    assert!(view.backing().ptr_eq(&buf));
}

#[test]
fn test_bytes_coerce_by_copy() {
    let bytes = b"host string".to_vec();
    let src_ptr = bytes.as_ptr();
    let view = RawView::coerce(BufferLike::Bytes(bytes));
    assert_ne!(view.as_ptr(), src_ptr);
    assert_eq!(view.as_slice(), b"host string");
    assert_eq!(view.backing().len(), 11);
}

#[test]
fn test_view_keeps_storage_alive() {
    let view = {
        let buf = Buffer::create_from(b"ephemeral handle");
        RawView::coerce(BufferLike::Owned(buf))
        // the last script-visible handle drops here
    };
    assert_eq!(view.as_slice(), b"ephemeral handle");
}

#[test]
fn test_non_buffer_like_is_a_type_error() {
    let err = BufferLike::expect(None, "table").unwrap_err();
    assert_eq!(
        err,
        BufferError::NotBufferLike {
            type_name: "table".to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_bytes_are_not_a_slicing_source() {
    let err = BufferLike::Bytes(vec![0; 4]).slice(0, 2).unwrap_err();
    assert_eq!(err, BufferError::NotSliceable);
    assert_eq!(err.kind(), ErrorKind::Type);
}

// ============================================================================
// Writes through views
// ============================================================================

#[test]
fn test_write_respects_view_bounds() {
    let buf = Buffer::create_from(b"0123456789");
    let view = RawView::coerce(buf.slice(2, 7).unwrap());

    view.write_all(b"abcde").unwrap();
    assert_eq!(buf.materialize(), b"01abcde789");

    assert_eq!(
        view.write(3, b"xyz"),
        Err(BufferError::OutOfBounds {
            offset: 3,
            len: 3,
            cap: 5
        })
    );
}

// ============================================================================
// Pin table
// ============================================================================

#[test]
fn test_prepare_allocates_and_pins() {
    let (view, r) = PinTable::prepare(32);
    assert_eq!(view.len(), 32);
    assert!(PinTable::contains(r));

    view.write_all(b"read completion").unwrap();
    let seen = PinTable::with(r, |b| b.materialize()).unwrap();
    assert_eq!(&seen[..15], b"read completion");

    let buf = PinTable::unpin(r).unwrap();
    assert_eq!(buf.len(), 32);
    assert!(!PinTable::contains(r));
}

#[test]
fn test_default_prepare_size() {
    assert_eq!(DEFAULT_PREPARE_SIZE, 64 * 1024);
}

#[test]
fn test_unpin_releases_exactly_once() {
    let r = PinTable::pin(Buffer::create(4));
    assert!(PinTable::unpin(r).is_some());
    assert!(PinTable::unpin(r).is_none());
    assert!(PinTable::with(r, |_| ()).is_none());
}
