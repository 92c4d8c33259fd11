//! Text patcher: literal, in-place substitution inside a single file
//!
//! The file is read fully into memory, every rule of a [`PatchSet`] is
//! applied in order, and the result is written back atomically. A file in
//! which no rule matched is never rewritten.

pub mod rules;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::common::fs::{copy_preserving_times, with_appended_suffix, write_bytes_atomic};
use crate::error::{self, Result};

pub use rules::{PatchSet, Replacement};

/// Suffix appended to the target's file name for its backup copy
pub const BACKUP_SUFFIX: &str = ".bak";

/// Options for a single patch run
#[derive(Debug, Clone, Copy)]
pub struct PatchOptions {
    /// Copy the original to `<file>.bak` before the first modification
    pub backup: bool,
    /// Compute match counts without writing anything
    pub dry_run: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            backup: true,
            dry_run: false,
        }
    }
}

/// Result of applying one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: Replacement,
    pub matches: usize,
}

/// Result of patching one file
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub rules: Vec<RuleOutcome>,
    /// Content differs from what was read
    pub changed: bool,
    /// Backup created by this run, if any
    pub backup: Option<PathBuf>,
    pub dry_run: bool,
    /// Running the same rules on the result would change nothing more
    pub stable: bool,
}

impl PatchOutcome {
    pub fn total_matches(&self) -> usize {
        self.rules.iter().map(|r| r.matches).sum()
    }

    /// Whether the file on disk was rewritten
    pub fn written(&self) -> bool {
        self.changed && !self.dry_run
    }
}

/// Apply `set` to the file at `path`
pub fn patch_file(path: &Path, set: &PatchSet, options: &PatchOptions) -> Result<PatchOutcome> {
    if set.is_empty() {
        return Err(crate::error::AssetError::NoPatchRules);
    }

    if !path.is_file() {
        return Err(error::fs::not_found(path.display().to_string()));
    }

    let bytes = fs::read(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;
    let content =
        String::from_utf8(bytes).map_err(|_| error::patch::not_utf8(path.display().to_string()))?;

    let (patched, counts) = set.apply(&content);
    let changed = patched != content;
    let stable = !changed || set.is_stable_on(&patched);

    let rules = set
        .rules()
        .iter()
        .cloned()
        .zip(counts)
        .map(|(rule, matches)| RuleOutcome { rule, matches })
        .collect();

    let mut outcome = PatchOutcome {
        path: path.to_path_buf(),
        rules,
        changed,
        backup: None,
        dry_run: options.dry_run,
        stable,
    };

    if !changed {
        debug!("{}: no rule matched, leaving file untouched", path.display());
        return Ok(outcome);
    }
    if options.dry_run {
        return Ok(outcome);
    }

    if options.backup {
        outcome.backup = backup_once(path)?;
    }

    write_bytes_atomic(path, patched.as_bytes())
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
    debug!(
        "{}: wrote {} replacement(s)",
        path.display(),
        outcome.total_matches()
    );

    Ok(outcome)
}

/// Copy `path` to `<path>.bak` unless that backup already exists
fn backup_once(path: &Path) -> Result<Option<PathBuf>> {
    let backup = with_appended_suffix(path, BACKUP_SUFFIX);
    if backup.exists() {
        debug!("backup {} already exists, keeping it", backup.display());
        return Ok(None);
    }

    copy_preserving_times(path, &backup)
        .map_err(|e| error::fs::backup_failed(path.display().to_string(), e.to_string()))?;
    Ok(Some(backup))
}
