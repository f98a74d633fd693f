//! Content type lookup by file extension.

use std::path::Path;

/// Content type used when no known extension matches.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Resolve the content type for a path.
///
/// The extension is whatever follows the last `.` of the whole path and is
/// matched case-sensitively.
pub fn mime_type(path: impl AsRef<Path>) -> &'static str {
    let path = path.as_ref().to_string_lossy();
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_MIME_TYPE;
    };

    match ext {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => DEFAULT_MIME_TYPE,
    }
}
