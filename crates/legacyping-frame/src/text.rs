//! Fixed-width UTF-16BE text, as used by every legacy ping string.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{DecodeError, Result};

/// Append `text` as UTF-16BE, two bytes per code unit, high byte first.
pub fn put_utf16_be(dst: &mut BytesMut, text: &str) {
    dst.reserve(text.len() * 2);
    for unit in text.encode_utf16() {
        dst.put_u16(unit);
    }
}

/// Decode a UTF-16BE byte slice.
///
/// An odd byte count is rejected rather than dropping the trailing byte.
pub fn decode_utf16_be(mut src: &[u8]) -> Result<String> {
    if src.len() % 2 != 0 {
        return Err(DecodeError::OddLength(src.len()));
    }

    let mut units = Vec::with_capacity(src.len() / 2);
    while src.has_remaining() {
        units.push(src.get_u16());
    }

    String::from_utf16(&units).map_err(|_| DecodeError::InvalidText)
}
