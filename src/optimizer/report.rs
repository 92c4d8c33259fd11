//! Per-file size reports and the run summary

use std::path::PathBuf;

use serde::Serialize;

use super::backup::BackupStatus;
use super::discovery::SkippedFile;

/// Outcome of optimizing one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub output_path: PathBuf,
    pub original_bytes: u64,
    pub new_bytes: u64,
    pub width: u32,
    pub height: u32,
    pub resized: bool,
    pub flattened: bool,
    pub backup: BackupStatus,
}

impl FileReport {
    pub fn original_kb(&self) -> f64 {
        to_kb(self.original_bytes)
    }

    pub fn new_kb(&self) -> f64 {
        to_kb(self.new_bytes)
    }

    /// `(1 - new / original) * 100`; negative when the output grew
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.new_bytes as f64 / self.original_bytes as f64) * 100.0
    }

    /// The output is larger than the original
    pub fn grew(&self) -> bool {
        self.new_bytes > self.original_bytes
    }

    /// `photo.png: 5120.0KB -> 812.3KB (84.1% reduction)`
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {:.1}KB -> {:.1}KB ({:.1}% reduction)",
            self.file_name,
            self.original_kb(),
            self.new_kb(),
            self.reduction_percent()
        )
    }
}

/// An image that could not be optimized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

impl FailedFile {
    pub fn summary_line(&self) -> String {
        format!("Error processing {}: {}", self.path.display(), self.error)
    }
}

/// A file a dry run would have optimized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub file_name: String,
    pub output_path: PathBuf,
}

/// Everything one `optimize` run did
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizeSummary {
    pub directory: PathBuf,
    pub backup_dir: PathBuf,
    pub dry_run: bool,
    pub optimized: Vec<FileReport>,
    pub failed: Vec<FailedFile>,
    pub skipped: Vec<SkippedFile>,
    pub planned: Vec<PlannedFile>,
}

impl OptimizeSummary {
    pub fn total_original_bytes(&self) -> u64 {
        self.optimized.iter().map(|r| r.original_bytes).sum()
    }

    pub fn total_new_bytes(&self) -> u64 {
        self.optimized.iter().map(|r| r.new_bytes).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}
