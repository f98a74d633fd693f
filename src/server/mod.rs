//! HTTP file server for minihttpd-rs.
//!
//! This module turns accepted connections into file responses: one tokio
//! task per connection, no state shared between them.

mod response;
mod config;
mod connection;
mod error;
mod files;
mod http_server;
mod mime;

// Re-export public items
pub use response::{error_response, send_error, HttpResponse, StatusCode};
pub use config::{ConfigFile, ServerConfig, DEFAULT_BACKLOG, DEFAULT_BUFFER_SIZE, DEFAULT_DOCUMENT, DEFAULT_PORT};
pub use connection::{handle_connection, serve_connection};
pub use error::Error;
pub use files::{resolve_path, serve_file};
pub use http_server::HttpServer;
pub use mime::{mime_type, DEFAULT_MIME_TYPE};
