//! ApiVersions (key 18) negotiation: advertised version table, allow-list
//! validation, response encoding.
//!
//! Success responses use the flexible-version body: CompactArray of key
//! ranges (length as unsigned varint: N+1), a tagged-fields byte per entry,
//! throttle_time_ms, then the top-level tagged-fields byte. Unsupported
//! versions get a short frame of correlation_id + error code 35 only.

use crate::error::Result;
use crate::protocol::codec::{
    frame_response, put_unsigned_varint, read_request_header, RequestHeader,
};
use bytes::{BufMut, BytesMut};

pub const API_KEY_API_VERSIONS: u16 = 18;

pub const ERROR_NONE: u16 = 0;
pub const ERROR_UNSUPPORTED_VERSION: u16 = 35;

/// One advertised API key range. Invariant: `min_version <= max_version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersionEntry {
    pub api_key: u16,
    pub min_version: u16,
    pub max_version: u16,
}

/// APIs this endpoint advertises. Built once, read-only for the life of the
/// process; safe for unsynchronized concurrent reads across connections.
pub const API_VERSION_TABLE: &[ApiVersionEntry] = &[ApiVersionEntry {
    api_key: API_KEY_API_VERSIONS,
    min_version: 0,
    max_version: 4,
}];

/// Request versions we can serve for ApiVersions itself. An explicit
/// allow-list rather than a min/max range check, so gaps stay expressible.
const API_VERSIONS_SUPPORTED: &[u16] = &[0, 1, 2, 3, 4];

/// Membership test for the requested (api_key, api_version) pair.
/// Unrecognized API keys always fail; the caller still answers with a
/// well-formed error frame rather than dropping the connection.
pub fn is_supported_version(api_key: u16, api_version: u16) -> bool {
    api_key == API_KEY_API_VERSIONS && API_VERSIONS_SUPPORTED.contains(&api_version)
}

/// Success body: correlation_id, error_code 0, compact array of version
/// ranges with per-entry tagged fields, throttle_time_ms, tagged fields.
pub fn build_api_versions_response(correlation_id: u32, table: &[ApiVersionEntry]) -> BytesMut {
    let mut dst = BytesMut::new();
    dst.put_u32(correlation_id);
    dst.put_u16(ERROR_NONE);
    put_unsigned_varint(&mut dst, (table.len() + 1) as u32);
    for entry in table {
        dst.put_u16(entry.api_key);
        dst.put_u16(entry.min_version);
        dst.put_u16(entry.max_version);
        put_unsigned_varint(&mut dst, 0); // tagged fields
    }
    dst.put_u32(0); // throttle_time_ms
    put_unsigned_varint(&mut dst, 0); // tagged fields
    dst
}

/// Error body: correlation_id + error code 35, nothing else. The framed
/// message length is always 6. A separate branch from the success path since
/// the wire size differs.
pub fn build_unsupported_version_response(correlation_id: u32) -> BytesMut {
    let mut dst = BytesMut::new();
    dst.put_u32(correlation_id);
    dst.put_u16(ERROR_UNSUPPORTED_VERSION);
    dst
}

/// Build the unframed response body for a parsed request header.
pub fn build_response(header: &RequestHeader, table: &[ApiVersionEntry]) -> BytesMut {
    if is_supported_version(header.api_key, header.api_version) {
        build_api_versions_response(header.correlation_id, table)
    } else {
        build_unsupported_version_response(header.correlation_id)
    }
}

/// Full request pipeline: parse the header, validate the version, return the
/// framed response. Fails only on a buffer too short to hold a header.
pub fn handle_request(buf: &[u8], table: &[ApiVersionEntry]) -> Result<BytesMut> {
    let header = read_request_header(buf)?;
    Ok(frame_response(build_response(&header, table)))
}
