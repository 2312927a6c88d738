//! Document File Storage Port - Filesystem persistence interface.
//!
//! Renderers hand their encoded bytes to this port when saving. Adapters
//! (like `LocalDocumentFileStorage`) decide how the bytes reach disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port for persisting rendered documents.
///
/// # Contract
///
/// Implementations must:
/// - Create missing parent directories of the target path
/// - Overwrite an existing file unconditionally
/// - Write atomically (no partial content at the target on failure)
/// - Report the size and SHA-256 checksum of what was written
pub trait DocumentFileStorage: Send + Sync {
    /// Write `content` to `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileTooLarge` when the content exceeds the
    /// adapter's limit, or an I/O flavoured error when the write fails.
    fn write(&self, path: &Path, content: &[u8]) -> Result<StoredDocument, StorageError>;
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    /// Where the file now lives.
    pub path: PathBuf,

    /// File size in bytes.
    pub size_bytes: u64,

    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

impl StoredDocument {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, checksum: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            checksum: checksum.into(),
        }
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Permission denied accessing the file or its directory.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Content is larger than the configured limit.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl StorageError {
    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a file too large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => StorageError::permission_denied(err.to_string()),
            _ => StorageError::io(err.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
