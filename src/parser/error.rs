//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line has fewer than three tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The input holds no request line at all.
    #[error("Empty request")]
    EmptyRequest,
}
