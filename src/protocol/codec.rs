//! Kafka request framing: fixed-offset header fields, big-endian.
//!
//! Frame: int32 (BE) length + body. The request header occupies the first
//! twelve bytes of the frame, length field included:
//! [0:4] message_length, [4:6] api_key, [6:8] api_version, [8:12] correlation_id.

use crate::error::{FranzError, Result};
use bytes::{BufMut, BytesMut};

/// Minimum byte count for a parseable request header.
pub const REQUEST_HEADER_LEN: usize = 12;

/// Request header fields, read at fixed offsets. Never mutated; lives for the
/// duration of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader {
    pub message_length: u32,
    pub api_key: u16,
    pub api_version: u16,
    pub correlation_id: u32,
}

/// Read the request header from a raw frame buffer.
///
/// The length field is taken as-is and not checked against the bytes actually
/// received. Buffers shorter than twelve bytes are rejected before any field
/// is touched.
pub fn read_request_header(buf: &[u8]) -> Result<RequestHeader> {
    if buf.len() < REQUEST_HEADER_LEN {
        return Err(FranzError::MalformedRequest(format!(
            "need {} header bytes, got {}",
            REQUEST_HEADER_LEN,
            buf.len()
        )));
    }
    Ok(RequestHeader {
        message_length: u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]),
        api_key: u16::from_be_bytes([buf[4], buf[5]]),
        api_version: u16::from_be_bytes([buf[6], buf[7]]),
        correlation_id: u32::from_be_bytes([buf[8], buf[9], buf[10], buf[11]]),
    })
}

/// Kafka unsigned varint (for CompactArray length, TaggedFields count).
pub fn put_unsigned_varint(dst: &mut BytesMut, mut u: u32) {
    while u > 0x7f {
        dst.put_u8((u as u8) | 0x80);
        u >>= 7;
    }
    dst.put_u8(u as u8);
}

/// Prepend the 4-byte frame length (BE) to a finished response body.
pub fn frame_response(body: BytesMut) -> BytesMut {
    let mut out = BytesMut::with_capacity(4 + body.len());
    out.put_u32(body.len() as u32);
    out.extend_from_slice(&body);
    out
}
