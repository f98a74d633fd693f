//! HTTP request line parser.
//!
//! Only the first line of a request is ever looked at. Headers and bodies
//! are left unread on the wire.

mod request;
mod error;

// Re-export public items
pub use request::{HttpRequest, MAX_METHOD_LEN, MAX_PATH_LEN, MAX_VERSION_LEN};
pub use error::Error;

// Re-export the parsing functions
pub use request::{first_line, parse_request, parse_request_line};
