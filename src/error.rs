use thiserror::Error;

/// Errors raised while reading or writing the file being patched
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid UTF-8 in file: {0}")]
    InvalidUtf8(String),
}

/// Errors raised around the replacement itself
///
/// A missing definition is never one of these: the replacement simply
/// leaves the text unchanged.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Invalid function name {0:?}: expected an identifier")]
    InvalidName(String),
    #[error("Invalid definition keyword {0:?}: expected an identifier")]
    InvalidKeyword(String),
    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
    #[error(transparent)]
    File(#[from] FileError),
}
