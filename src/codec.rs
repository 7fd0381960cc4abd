//! Text codec seam.
//!
//! Turning buffer contents into host text belongs to an external codec
//! collaborator. The trait below is that seam; [`Passthrough`] hands the
//! region through untouched until a real codec is wired in.

use crate::error::BufferResult;

/// External text codec applied by `Buffer::decode` and `Slice::encode`.
pub trait Codec {
    /// Decode raw bytes into host text bytes.
    fn decode(&self, bytes: &[u8]) -> BufferResult<Vec<u8>>;

    /// Encode a viewed region into host text bytes.
    fn encode(&self, bytes: &[u8]) -> BufferResult<Vec<u8>>;
}

/// Identity codec.
// TODO: replace with a UTF-8 codec once the host runtime grows a text type
// distinct from byte strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Codec for Passthrough {
    fn decode(&self, bytes: &[u8]) -> BufferResult<Vec<u8>> {
        Ok(bytes.to_vec())
    }

    fn encode(&self, bytes: &[u8]) -> BufferResult<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::value::BufferLike;

    #[test]
    fn test_passthrough_decode() {
        let buf = Buffer::create_from(b"raw \xff bytes");
        assert_eq!(buf.decode(&Passthrough).unwrap(), b"raw \xff bytes");
    }

    #[test]
    fn test_passthrough_encode_on_slice() {
        let buf = Buffer::create_from(b"0123456789");
        let slice = match buf.slice(3, 7).unwrap() {
            BufferLike::View(s) => s,
            other => panic!("expected a view, got {:?}", other),
        };
        assert_eq!(slice.encode(&Passthrough).unwrap(), b"3456");
    }
}
