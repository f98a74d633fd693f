//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::server::error::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default size of the request read buffer and of file streaming chunks.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;
/// Default depth of the pending-connection queue.
pub const DEFAULT_BACKLOG: u32 = 10;
/// File served when the request target is `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The read buffer size, also used as the file streaming chunk size.
    pub read_buffer_size: usize,
    /// The listen backlog.
    pub backlog: u32,
    /// Directory that request targets are resolved against.
    pub document_root: PathBuf,
    /// File name substituted for the `/` target.
    pub default_document: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            read_buffer_size: DEFAULT_BUFFER_SIZE,
            backlog: DEFAULT_BACKLOG,
            document_root: PathBuf::from("."),
            default_document: DEFAULT_DOCUMENT.to_string(),
        }
    }
}

/// On-disk configuration. Every key is optional and overrides the default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    /// Address to listen on.
    pub host: Option<IpAddr>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// Read buffer and file chunk size in bytes.
    pub buffer_size: Option<usize>,
    /// Depth of the pending-connection queue.
    pub backlog_depth: Option<u32>,
    /// Directory to serve files from.
    pub document_root: Option<PathBuf>,
    /// File served for the `/` target.
    pub default_document: Option<String>,
}

impl ConfigFile {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

impl ServerConfig {
    /// Overlay the keys present in `file` onto this configuration.
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(host) = file.host {
            self.addr.set_ip(host);
        }
        if let Some(port) = file.port {
            self.addr.set_port(port);
        }
        if let Some(size) = file.buffer_size {
            self.read_buffer_size = size;
        }
        if let Some(backlog) = file.backlog_depth {
            self.backlog = backlog;
        }
        if let Some(root) = file.document_root {
            self.document_root = root;
        }
        if let Some(document) = file.default_document {
            self.default_document = document;
        }
        self
    }

    /// Check the values that would make the server unusable.
    pub fn validate(&self) -> Result<(), Error> {
        if self.read_buffer_size == 0 {
            return Err(Error::ConfigError("buffer size must be greater than zero".to_string()));
        }
        if self.backlog == 0 {
            return Err(Error::ConfigError("backlog depth must be greater than zero".to_string()));
        }
        if self.default_document.is_empty() || self.default_document.contains(['/', '\\']) {
            return Err(Error::ConfigError(format!(
                "default document must be a plain file name, got {:?}",
                self.default_document
            )));
        }
        if !self.document_root.is_dir() {
            return Err(Error::ConfigError(format!(
                "document root {} is not a directory",
                self.document_root.display()
            )));
        }
        Ok(())
    }
}
