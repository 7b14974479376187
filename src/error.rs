//! Error types for the broker endpoint.

use thiserror::Error;

/// Result alias for broker operations.
pub type Result<T> = std::result::Result<T, FranzError>;

/// Errors that can occur while serving a connection.
///
/// An unsupported API version is not represented here: it is a protocol
/// outcome carried as error code 35 inside a well-formed response frame.
#[derive(Error, Debug)]
pub enum FranzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}
