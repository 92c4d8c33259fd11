//! File system errors

use std::path::Path;

use super::AssetError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> AssetError {
    AssetError::FileNotFound { path: path.into() }
}

/// Creates a not-a-directory error
pub fn not_a_directory(path: &Path) -> AssetError {
    AssetError::NotADirectory {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a backup failed error
pub fn backup_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::BackupFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
