//! Image optimizer: back up, flatten, downscale and re-encode a directory of images
//!
//! A run walks the top level of one directory. For every recognized image it
//! makes a write-once backup, decodes it, composites any transparency onto an
//! opaque background, fits it inside `max_dimension`, and writes
//! `<stem><suffix>.jpg` next to the original.
//!
//! Failures are per file: an image that cannot be processed is recorded in
//! the [`OptimizeSummary`] and the run moves on. Only setup (missing source
//! directory, unusable backup folder, bad exclude pattern) aborts a run.

pub mod backup;
pub mod discovery;
pub mod encode;
pub mod report;
pub mod transform;

use std::path::{Path, PathBuf};

use image::ImageReader;
use log::debug;

use crate::config::OptimizerConfig;
use crate::error::{self, AssetError, Result};
use crate::ui::ProgressReporter;

pub use backup::BackupStatus;
pub use discovery::{ImageCandidate, SkipReason};
pub use report::{FailedFile, FileReport, OptimizeSummary, PlannedFile};

/// Run-level switches that are not part of the persisted configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizeOptions {
    /// Hash existing backups and warn when they differ from the original
    pub verify_backups: bool,
    /// List what would be done without touching the file system
    pub dry_run: bool,
}

/// Optimizer for one source directory
pub struct Optimizer<'a> {
    dir: PathBuf,
    config: &'a OptimizerConfig,
    options: OptimizeOptions,
}

impl<'a> Optimizer<'a> {
    pub fn new(
        dir: impl Into<PathBuf>,
        config: &'a OptimizerConfig,
        options: OptimizeOptions,
    ) -> Self {
        Self {
            dir: dir.into(),
            config,
            options,
        }
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.config.backup_dir_for(&self.dir)
    }

    /// Process every candidate in the directory
    pub fn run(&self, progress: &mut dyn ProgressReporter) -> Result<OptimizeSummary> {
        self.check_setup()?;

        let backup_dir = self.backup_dir();
        let found = discovery::discover(&self.dir, self.config)?;

        let mut summary = OptimizeSummary {
            directory: self.dir.clone(),
            backup_dir: backup_dir.clone(),
            dry_run: self.options.dry_run,
            skipped: found.skipped,
            ..Default::default()
        };

        if self.options.dry_run {
            summary.planned = found
                .candidates
                .into_iter()
                .map(|c| PlannedFile {
                    file_name: c.file_name,
                    output_path: c.output_path,
                })
                .collect();
            return Ok(summary);
        }

        backup::ensure_backup_dir(&backup_dir)?;

        progress.start(found.candidates.len() as u64);
        for candidate in &found.candidates {
            progress.update_file(&candidate.file_name);

            match self.process(candidate, &backup_dir) {
                Ok(report) => {
                    if report.grew() {
                        debug!(
                            "{}: optimized output is larger than the original",
                            candidate.file_name
                        );
                    }
                    summary.optimized.push(report);
                }
                Err(e) => {
                    debug!("{}: {}", candidate.file_name, e);
                    summary.failed.push(FailedFile {
                        path: candidate.path.clone(),
                        error: e.to_string(),
                    });
                }
            }

            progress.inc();
        }
        progress.finish();

        Ok(summary)
    }

    /// Backup, decode, flatten, resize, encode and measure one image
    pub fn process(&self, candidate: &ImageCandidate, backup_dir: &Path) -> Result<FileReport> {
        let backup =
            backup::backup_original(&candidate.path, backup_dir, self.options.verify_backups)?;

        let img = ImageReader::open(&candidate.path)
            .map_err(|e| {
                error::fs::read_failed(candidate.path.display().to_string(), e.to_string())
            })?
            .with_guessed_format()
            .map_err(|e| decode_error(&candidate.path, &e))?
            .decode()
            .map_err(|e| decode_error(&candidate.path, &e))?;

        let flattened = img.color().has_alpha();
        let rgb = transform::flatten_alpha(&img, self.config.background);
        drop(img);

        let (orig_w, orig_h) = rgb.dimensions();
        let rgb = transform::fit_within(rgb, self.config.max_dimension);
        let (width, height) = rgb.dimensions();
        let resized = (width, height) != (orig_w, orig_h);
        if resized {
            debug!(
                "{}: resized {}x{} -> {}x{}",
                candidate.file_name, orig_w, orig_h, width, height
            );
        }

        let new_bytes = encode::write_jpeg(&rgb, self.config.quality, &candidate.output_path)?;
        let original_bytes = std::fs::metadata(&candidate.path)
            .map_err(|e| {
                error::fs::read_failed(candidate.path.display().to_string(), e.to_string())
            })?
            .len();

        Ok(FileReport {
            file_name: candidate.file_name.clone(),
            output_path: candidate.output_path.clone(),
            original_bytes,
            new_bytes,
            width,
            height,
            resized,
            flattened,
            backup,
        })
    }

    fn check_setup(&self) -> Result<()> {
        if !self.dir.exists() {
            return Err(error::fs::not_found(self.dir.display().to_string()));
        }
        if !self.dir.is_dir() {
            return Err(error::fs::not_a_directory(&self.dir));
        }
        self.config.validate()?;

        let backup_dir = self.backup_dir();
        if same_dir(&backup_dir, &self.dir) {
            return Err(error::config::invalid(
                "backup_dir must differ from the source directory",
            ));
        }
        if backup_dir.exists() && !backup_dir.is_dir() {
            return Err(error::fs::not_a_directory(&backup_dir));
        }
        Ok(())
    }
}

fn decode_error(path: &Path, err: &dyn std::fmt::Display) -> AssetError {
    error::image::decode_failed(path.display().to_string(), err.to_string())
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
