//! Static file serving from the document root.

use std::path::{Component, Path, PathBuf};

use log::debug;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::mime::mime_type;
use crate::server::response::{send_error, HttpResponse, StatusCode};

/// Map a request target onto a path under the document root.
///
/// Any target containing `..` is refused outright, even when it would be
/// harmless (`/a..b.txt`). Symlinks inside the root are followed.
pub fn resolve_path(config: &ServerConfig, target: &str) -> Result<PathBuf, Error> {
    if target.contains("..") {
        return Err(Error::Forbidden(target.to_string()));
    }

    let relative = if target == "/" {
        config.default_document.as_str()
    } else {
        target.trim_start_matches('/')
    };

    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(Error::Forbidden(target.to_string()));
    }

    Ok(config.document_root.join(relative))
}

/// Open `path` if it names a regular file, returning it with its length.
async fn open_regular_file(path: &Path) -> std::io::Result<Option<(File, u64)>> {
    let file = File::open(path).await?;
    let metadata = file.metadata().await?;
    if !metadata.is_file() {
        return Ok(None);
    }
    Ok(Some((file, metadata.len())))
}

/// Serve the file named by `target`, writing a complete response to `stream`.
///
/// Refused and missing targets get their error page and come back as
/// `Error::Forbidden` / `Error::NotFound`. Once the 200 head is written any
/// failure is an `Error::IoError` and the body is left truncated.
///
/// # Returns
///
/// The number of body bytes written.
pub async fn serve_file<W>(stream: &mut W, target: &str, config: &ServerConfig) -> Result<u64, Error>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let path = match resolve_path(config, target) {
        Ok(path) => path,
        Err(e) => {
            send_error(stream, StatusCode::Forbidden).await?;
            return Err(e);
        }
    };

    let (file, length) = match open_regular_file(&path).await {
        Ok(Some(opened)) => opened,
        Ok(None) | Err(_) => {
            debug!("Cannot serve {}", path.display());
            send_error(stream, StatusCode::NotFound).await?;
            return Err(Error::NotFound(target.to_string()));
        }
    };

    let head = HttpResponse::new(StatusCode::Ok)
        .with_content_type(mime_type(&path))
        .with_content_length(length);
    stream.write_all(&head.head_bytes()).await?;

    let written = stream_body(stream, file, length, config.read_buffer_size).await?;
    stream.flush().await?;
    Ok(written)
}

/// Copy exactly `length` bytes of `file` to `stream` in `chunk_size` pieces.
pub(crate) async fn stream_body<W>(stream: &mut W, file: File, length: u64, chunk_size: usize) -> Result<u64, Error>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut file = file.take(length);
    let mut buf = vec![0; chunk_size.max(1)];
    let mut written = 0u64;

    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&buf[..n]).await?;
        written += n as u64;
    }

    if written < length {
        // The file shrank after its length was announced.
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("file ended after {written} of {length} bytes"),
        )));
    }

    Ok(written)
}
