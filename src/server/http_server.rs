//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{info, error};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::signal;
use tokio::task::JoinSet;

use crate::server::config::ServerConfig;
use crate::server::connection::serve_connection;
use crate::server::error::Error;

/// How long in-flight connections may run once shutdown starts.
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// An HTTP file server.
pub struct HttpServer {
    /// The server configuration.
    pub config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Display the server banner and what is being served.
    fn display_server_info(&self) {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        let root = &self.config.document_root;
        let root = root.canonicalize().unwrap_or_else(|_| root.clone());
        info!("Serving files from: {}", root.display());
        info!("Default document: {}", self.config.default_document);
    }

    /// Bind the TCP listener with the configured backlog.
    pub fn bind(&self) -> Result<TcpListener, Error> {
        let addr = self.config.addr;
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;

        let listener = socket.listen(self.config.backlog)?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Spawn an isolated task for a new connection.
    fn handle_new_connection(
        socket: TcpStream,
        addr: SocketAddr,
        config: Arc<ServerConfig>,
        tasks: &mut JoinSet<()>,
    ) {
        tasks.spawn(async move {
            serve_connection(socket, addr, &config).await;
        });
    }

    /// Handle connection errors.
    async fn handle_connection_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Wait a bit before retrying, accept errors are usually resource exhaustion
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Log the outcome of a finished connection task.
    fn reap(result: Result<(), tokio::task::JoinError>) {
        if let Err(e) = result {
            if e.is_panic() {
                error!("Connection task panicked: {e}");
            }
        }
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(SHUTDOWN_TIMEOUT_SECS);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                Self::reap(res);
            }
        }).await;

        if drained.is_err() {
            error!("Shutdown timed out, aborting {len} connections", len = tasks.len());
            tasks.shutdown().await;
        }

        info!("Server shutdown complete");
    }

    /// Accept connections on `listener` until `shutdown` resolves.
    pub async fn serve(&self, listener: TcpListener, shutdown: impl Future<Output = ()>) -> Result<(), Error> {
        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = &mut shutdown => {
                    info!("Shutting down server...");
                    break;
                }

                // Reclaim finished connections
                Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                    Self::reap(res);
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(socket, addr, self.config.clone(), &mut tasks);
                        },
                        Err(e) => Self::handle_connection_error(e).await,
                    }
                }
            }
        }

        // Perform graceful shutdown
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Start the server and run until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.config.validate()?;

        // Display server information
        self.display_server_info();

        // Set up the TCP listener
        let listener = self.bind()?;

        let ctrl_c = async {
            match signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                    std::future::pending::<()>().await;
                }
            }
        };

        self.serve(listener, ctrl_c).await
    }
}
