//! Command-line entry point for minihttpd.
//!
//! ```bash
//! minihttpd --port 8080 --root ./public
//! MINIHTTPD_PORT=9000 minihttpd --config server.json
//! ```

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use minihttpd_rs::{ConfigFile, HttpServer, ServerConfig, ServerError};

/// A minimal HTTP/1.1 static file server.
#[derive(Debug, Parser)]
#[command(name = "minihttpd", version, about)]
struct Cli {
    /// JSON configuration file; command-line options take precedence
    #[arg(short, long, env = "MINIHTTPD_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "MINIHTTPD_HOST")]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long, env = "MINIHTTPD_PORT")]
    port: Option<u16>,

    /// Request read buffer and file chunk size in bytes
    #[arg(long = "buffer-size", env = "MINIHTTPD_BUFFER_SIZE")]
    buffer_size: Option<usize>,

    /// Depth of the pending-connection queue
    #[arg(long, env = "MINIHTTPD_BACKLOG")]
    backlog: Option<u32>,

    /// Directory to serve files from
    #[arg(short, long, env = "MINIHTTPD_ROOT")]
    root: Option<PathBuf>,

    /// File served for the `/` target
    #[arg(long = "default-document", env = "MINIHTTPD_DEFAULT_DOCUMENT")]
    default_document: Option<String>,
}

impl Cli {
    /// Build the effective configuration: defaults, then file, then flags.
    fn into_config(self) -> Result<ServerConfig, ServerError> {
        let mut config = ServerConfig::default();
        if let Some(path) = &self.config {
            config = config.merge(ConfigFile::load(path)?);
        }

        Ok(config.merge(ConfigFile {
            host: self.host,
            port: self.port,
            buffer_size: self.buffer_size,
            backlog_depth: self.backlog,
            document_root: self.root,
            default_document: self.default_document,
        }))
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;
    info!("Starting with {config:?}");

    HttpServer::new(config).start().await
}
