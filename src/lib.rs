//! Franz: a minimal Kafka-wire-protocol broker endpoint.
//!
//! Accepts a TCP connection, reads one framed request, validates the
//! requested API version, and answers with a correctly framed ApiVersions
//! response (compact arrays, tagged fields) or a short UNSUPPORTED_VERSION
//! error frame.

pub mod admin;
pub mod error;
pub mod observability;
pub mod protocol;
pub mod server;

pub use error::{FranzError, Result};
pub use protocol::{handle_request, read_request_header, ApiVersionEntry, RequestHeader, API_VERSION_TABLE};
