//! Local Filesystem Storage Adapter - Implementation of DocumentFileStorage.
//!
//! Writes rendered documents to the local filesystem. Uses atomic writes and
//! SHA-256 checksums for data integrity.

use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ports::{DocumentFileStorage, StorageError, StoredDocument};

/// Default maximum file size (16 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// Local filesystem storage for rendered documents.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{name}.tmp` next to the target
/// 2. Sync to disk
/// 3. Rename over the target
///
/// A failed write leaves any previous file at the target untouched.
#[derive(Debug, Clone)]
pub struct LocalDocumentFileStorage {
    max_file_size_bytes: u64,
}

impl Default for LocalDocumentFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalDocumentFileStorage {
    /// Creates storage with the default size limit.
    pub fn new() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }

    /// Overrides the size limit.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }

    /// Ensures the parent directory exists.
    fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(|e| {
                StorageError::io(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            }),
            _ => Ok(()),
        }
    }

    /// Computes SHA-256 checksum of the given content.
    pub fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }

    fn write_temp(temp_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(temp_path.display().to_string())
            }
            _ => StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            )),
        })?;

        file.write_all(content).map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }
}

impl DocumentFileStorage for LocalDocumentFileStorage {
    fn write(&self, path: &Path, content: &[u8]) -> Result<StoredDocument, StorageError> {
        let size = content.len() as u64;
        if size > self.max_file_size_bytes {
            return Err(StorageError::file_too_large(size, self.max_file_size_bytes));
        }

        Self::ensure_parent_dir(path)?;

        let temp_path = Self::temp_path(path);
        if let Err(err) = Self::write_temp(&temp_path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), size_bytes = size, "Wrote document file");

        Ok(StoredDocument::new(
            path,
            size,
            Self::compute_checksum(content),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
