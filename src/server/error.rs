//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;
use crate::server::response::StatusCode;

/// Errors that can occur during HTTP server operation.
///
/// Every variant is resolved at the connection boundary; none of them
/// outlives the connection that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request line.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// The request target tried to leave the document root.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested file not found or not readable.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request method is not supported.
    #[error("Method not implemented: {0}")]
    NotImplemented(String),

    /// I/O error on the connection or the file being streamed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid server configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// The status code sent to the peer for this error, if any.
    ///
    /// I/O errors have none: by the time they happen the response head may
    /// already be on the wire.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ParseError(_) => Some(StatusCode::BadRequest),
            Error::Forbidden(_) => Some(StatusCode::Forbidden),
            Error::NotFound(_) => Some(StatusCode::NotFound),
            Error::NotImplemented(_) => Some(StatusCode::NotImplemented),
            Error::IoError(_) | Error::ConfigError(_) | Error::JsonError(_) => None,
        }
    }
}
