//! Kafka binary wire protocol: request framing and ApiVersions negotiation.
//!
//! Frame: int32 (BE) length + body. See codec.rs for header layout and
//! api_versions.rs for response encoding.

mod api_versions;
mod codec;

pub use api_versions::{
    build_api_versions_response, build_response, build_unsupported_version_response,
    handle_request, is_supported_version, ApiVersionEntry, API_KEY_API_VERSIONS,
    API_VERSION_TABLE, ERROR_NONE, ERROR_UNSUPPORTED_VERSION,
};
pub use codec::{
    frame_response, put_unsigned_varint, read_request_header, RequestHeader, REQUEST_HEADER_LEN,
};
