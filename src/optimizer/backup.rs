//! Write-once backups of original images

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::common::fs::copy_preserving_times;
use crate::error::{self, Result};
use crate::hash;

/// What happened to an original's backup during this run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    /// Copied during this run
    Created,
    /// A backup with the same file name already existed and was trusted as-is
    Existing,
    /// Already existed and its content matches the original
    Verified,
    /// Already existed but its content differs from the current original
    Mismatch,
}

/// Create the backup folder if needed
pub fn ensure_backup_dir(backup_dir: &Path) -> Result<()> {
    if backup_dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(backup_dir)
        .map_err(|e| error::fs::write_failed(backup_dir.display().to_string(), e.to_string()))?;
    debug!("created backup folder {}", backup_dir.display());
    Ok(())
}

/// Backup location for an original
pub fn backup_path(original: &Path, backup_dir: &Path) -> PathBuf {
    backup_dir.join(original.file_name().unwrap_or_default())
}

/// Copy `original` into `backup_dir` unless a backup with its file name
/// exists. An existing backup is never overwritten; with `verify` its
/// content is compared against the original.
pub fn backup_original(original: &Path, backup_dir: &Path, verify: bool) -> Result<BackupStatus> {
    let target = backup_path(original, backup_dir);

    if target.exists() {
        if !verify {
            return Ok(BackupStatus::Existing);
        }
        return if hash::same_content(original, &target)? {
            Ok(BackupStatus::Verified)
        } else {
            debug!(
                "backup {} differs from {}; keeping the existing backup",
                target.display(),
                original.display()
            );
            Ok(BackupStatus::Mismatch)
        };
    }

    copy_preserving_times(original, &target)
        .map_err(|e| error::fs::backup_failed(original.display().to_string(), e.to_string()))?;
    debug!("backed up {} -> {}", original.display(), target.display());
    Ok(BackupStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("photo.png");
        std::fs::write(&original, b"original bytes").unwrap();
        let backup_dir = temp.path().join("backup");
        ensure_backup_dir(&backup_dir).unwrap();
        (temp, original, backup_dir)
    }

    #[test]
    fn test_backup_created_once() {
        let (_temp, original, backup_dir) = setup();

        assert_eq!(
            backup_original(&original, &backup_dir, false).unwrap(),
            BackupStatus::Created
        );
        assert_eq!(
            std::fs::read(backup_dir.join("photo.png")).unwrap(),
            b"original bytes"
        );

        std::fs::write(&original, b"changed since").unwrap();
        assert_eq!(
            backup_original(&original, &backup_dir, false).unwrap(),
            BackupStatus::Existing
        );
        assert_eq!(
            std::fs::read(backup_dir.join("photo.png")).unwrap(),
            b"original bytes"
        );
    }

    #[test]
    fn test_backup_verify() {
        let (_temp, original, backup_dir) = setup();
        backup_original(&original, &backup_dir, true).unwrap();

        assert_eq!(
            backup_original(&original, &backup_dir, true).unwrap(),
            BackupStatus::Verified
        );

        std::fs::write(&original, b"edited").unwrap();
        assert_eq!(
            backup_original(&original, &backup_dir, true).unwrap(),
            BackupStatus::Mismatch
        );
        assert_eq!(
            std::fs::read(backup_dir.join("photo.png")).unwrap(),
            b"original bytes"
        );
    }

    #[test]
    fn test_ensure_backup_dir_nested() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/backup");
        ensure_backup_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_backup_dir(&dir).unwrap();
    }

    #[test]
    fn test_backup_missing_original() {
        let (temp, _original, backup_dir) = setup();
        let err = backup_original(&temp.path().join("ghost.png"), &backup_dir, false).unwrap_err();
        assert!(matches!(err, crate::error::AssetError::BackupFailed { .. }));
    }
}
