//! Per-connection request handling.
//!
//! A connection carries exactly one exchange:
//!
//! ```text
//! AwaitingRequest --(0 bytes / read error)--------------------------> Closed
//! AwaitingRequest --(unparseable line)--> 400 ----------------------> Closed
//! AwaitingRequest --(parsed)--> Parsed --(GET)--> file server -------> Closed
//!                                      \--(other)--> 501 -----------> Closed
//! ```
//!
//! Nothing past the first line is ever read.

use std::net::SocketAddr;

use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::parser::parse_request;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::files::serve_file;
use crate::server::response::{send_error, StatusCode};

/// Handle a single request on `socket` without closing it.
///
/// Returns `Ok` when nothing was received or a file was served in full.
/// Requests answered with an error page come back as the matching `Err`.
pub async fn handle_connection<S>(socket: &mut S, peer: SocketAddr, config: &ServerConfig) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin + ?Sized,
{
    let mut buf = vec![0; config.read_buffer_size];

    // Read data from the socket
    let n = match socket.read(&mut buf).await {
        Ok(0) => return Ok(()), // Connection closed
        Ok(n) => n,
        Err(e) => {
            debug!("[{ip}] Read failed: {e}", ip = peer.ip());
            return Ok(());
        }
    };

    // Parse the HTTP request line
    let request = match parse_request(&buf[..n]) {
        Ok(req) => req,
        Err(e) => {
            send_error(socket, StatusCode::BadRequest).await?;
            return Err(Error::ParseError(e));
        }
    };

    info!("[{ip}] {method} {path}", ip = peer.ip(), method = request.method, path = request.path);

    if !request.is_get() {
        send_error(socket, StatusCode::NotImplemented).await?;
        return Err(Error::NotImplemented(request.method));
    }

    let sent = serve_file(socket, &request.path, config).await?;
    debug!("[{ip}] Sent {sent} bytes for {path}", ip = peer.ip(), path = request.path);

    Ok(())
}

/// Run one exchange on `socket`, then close it.
///
/// The socket is shut down exactly once whatever the outcome and is
/// dropped on return.
pub async fn serve_connection<S>(mut socket: S, peer: SocketAddr, config: &ServerConfig)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let result = handle_connection(&mut socket, peer, config).await;

    if let Err(e) = socket.shutdown().await {
        debug!("[{ip}] Shutdown failed: {e}", ip = peer.ip());
    }

    match result {
        Ok(()) => {}
        Err(e) if e.status().is_some() => {
            debug!("[{ip}] Answered with error: {e}", ip = peer.ip());
        }
        Err(e) => {
            warn!("[{ip}] Connection aborted: {e}", ip = peer.ip());
        }
    }
}
