//! A minimal HTTP/1.1 static file server.
//!
//! Each connection carries a single exchange: the request line is parsed,
//! a `GET` target is looked up under the document root and streamed back,
//! anything else gets a small HTML error page. The connection is then
//! closed.
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use minihttpd_rs::parse_request;
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//! assert_eq!(request.method, "GET");
//! assert_eq!(request.path, "/index.html");
//! assert_eq!(request.version, "HTTP/1.1");
//! ```
//!
//! ## Error handling
//!
//! ```
//! use minihttpd_rs::{parse_request, ParserError};
//!
//! match parse_request(b"GET\r\n") {
//!     Ok(_) => println!("Request parsed successfully"),
//!     Err(ParserError::MalformedRequestLine(line)) => println!("Malformed request line: {}", line),
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use minihttpd_rs::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), minihttpd_rs::ServerError> {
//! let config = ServerConfig {
//!     document_root: "./public".into(),
//!     ..ServerConfig::default()
//! };
//! HttpServer::new(config).start().await
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, parse_request};
pub use server::{
    error_response, mime_type, ConfigFile, Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode,
};
