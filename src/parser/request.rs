//! HTTP request line parsing and representation.

use std::fmt;

use crate::parser::error::Error;

/// Maximum number of characters kept from the method token.
pub const MAX_METHOD_LEN: usize = 15;
/// Maximum number of characters kept from the request target.
pub const MAX_PATH_LEN: usize = 255;
/// Maximum number of characters kept from the version token.
pub const MAX_VERSION_LEN: usize = 15;

/// Represents a parsed HTTP request line.
///
/// Method and version are kept as raw tokens: any token is accepted here
/// and it is up to the caller to decide what it can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: String,
    /// The request target, verbatim
    pub path: String,
    /// The HTTP version token
    pub version: String,
}

impl HttpRequest {
    /// Create a new HTTP request, truncating each field at its limit.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method token
    /// * `path` - The request target
    /// * `version` - The HTTP version token
    pub fn new(method: &str, path: &str, version: &str) -> Self {
        Self {
            method: truncate(method, MAX_METHOD_LEN),
            path: truncate(path, MAX_PATH_LEN),
            version: truncate(version, MAX_VERSION_LEN),
        }
    }

    /// Returns true if the method is exactly `GET`.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.path, self.version)
    }
}

fn truncate(token: &str, limit: usize) -> String {
    match token.char_indices().nth(limit) {
        Some((idx, _)) => token[..idx].to_string(),
        None => token.to_string(),
    }
}

/// Isolate the first line of a raw read buffer.
///
/// Input past the first NUL byte is discarded. Leading CR and LF bytes are
/// skipped; the line runs up to the next CR or LF, or to the end of the
/// input. Returns `None` if no line is left.
pub fn first_line(input: &[u8]) -> Option<&[u8]> {
    let is_eol = |b: &u8| *b == b'\r' || *b == b'\n';

    let input = input.split(|b| *b == 0).next().unwrap_or(input);
    let start = input.iter().position(|b| !is_eol(b))?;
    let rest = &input[start..];
    let end = rest.iter().position(is_eol).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Parse a single request line of the form `METHOD SP TARGET SP VERSION`.
///
/// Tokens are separated by ASCII whitespace, vertical tab included. Tokens
/// past the third are ignored.
///
/// # Returns
///
/// The parsed request, or `Error::MalformedRequestLine` if fewer than three
/// tokens are present.
pub fn parse_request_line(line: &str) -> Result<HttpRequest, Error> {
    let mut parts = line
        .split(|c: char| c.is_ascii_whitespace() || c == '\x0B')
        .filter(|t| !t.is_empty());

    match (parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), Some(version)) => Ok(HttpRequest::new(method, path, version)),
        _ => Err(Error::MalformedRequestLine(line.to_string())),
    }
}

/// Parse an HTTP request from the bytes of a single read.
///
/// Only the first line is considered. Invalid UTF-8 is replaced rather than
/// rejected, so such a target simply will not match any file.
///
/// # Arguments
///
/// * `input` - A byte slice containing the start of the HTTP request
///
/// # Returns
///
/// The parsed HTTP request, or an error if the request line is invalid
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let line = first_line(input).ok_or(Error::EmptyRequest)?;
    parse_request_line(&String::from_utf8_lossy(line))
}
