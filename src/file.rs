use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::FileError;

/// Content of a file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path as given by the caller
    pub path: String,
    /// File content as valid UTF-8 string
    pub content: String,
    /// Byte length of the content
    pub len: usize,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// Hex-encoded BLAKE3 hash of `text`
pub fn checksum(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Read a file from disk with UTF-8 validation
///
/// # Returns
/// * `Ok(FileContent)` - File content with its checksum
/// * `Err(FileError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FileError> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();

    let bytes = fs::read(path_ref).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path_str.clone()),
        _ => FileError::Io {
            path: path_str.clone(),
            source: e,
        },
    })?;

    let content = String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(path_str.clone()))?;
    let checksum = checksum(&content);
    debug!(path = %path_str, len = content.len(), %checksum, "read file");

    Ok(FileContent {
        path: path_str,
        len: content.len(),
        content,
        checksum,
    })
}

/// Replace the whole content of `path` with `text`
pub fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<(), FileError> {
    let path_ref = path.as_ref();
    fs::write(path_ref, text.as_bytes()).map_err(|e| FileError::Io {
        path: path_ref.display().to_string(),
        source: e,
    })?;
    debug!(path = %path_ref.display(), len = text.len(), "wrote file");
    Ok(())
}
