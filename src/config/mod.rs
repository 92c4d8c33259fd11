//! Configuration file (`assetkit.yaml`) data structures
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! Command-line flags are layered on top by the command implementations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wax::Glob;

use crate::error::{self, AssetError, Result};
use crate::patcher::Replacement;

/// Config file looked up in the current directory when none is given
pub const CONFIG_FILE_NAME: &str = "assetkit.yaml";

/// Extension of every optimized output
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Largest width or height a JPEG can store
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    pub optimize: OptimizerConfig,
    pub patch: PatchConfig,
}

/// Settings for `assetkit optimize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    /// Longest allowed side in pixels
    pub max_dimension: u32,
    /// JPEG quality, 1..=100
    pub quality: u8,
    /// Marker inserted before `.jpg` in output names
    pub suffix: String,
    /// Backup folder; relative paths resolve against the source directory
    pub backup_dir: PathBuf,
    /// Recognized extensions, without the dot, matched case-insensitively
    pub extensions: Vec<String>,
    /// Opaque color transparent pixels are composited onto
    pub background: [u8; 3],
    /// Glob patterns of file names to leave alone
    pub exclude: Vec<String>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1920,
            quality: 85,
            suffix: "_optimized".to_string(),
            backup_dir: PathBuf::from("backup"),
            extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
            background: [255, 255, 255],
            exclude: Vec::new(),
        }
    }
}

/// Settings for `assetkit patch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// Keep a `<file>.bak` copy of the original
    pub backup: bool,
    /// Rules applied when no `--rules` file or `--from/--to` pair is given
    pub rules: Vec<Replacement>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            backup: true,
            rules: Vec::new(),
        }
    }
}

impl AssetConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `assetkit.yaml` in `cwd` is
    /// used when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(error::config::not_found(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = cwd.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, cwd.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        let config = Self::from_yaml(&content).map_err(|e| with_path(e, &path))?;
        log::debug!("loaded configuration from {}", path.display());

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.optimize.validate()?;
        for (i, rule) in self.patch.rules.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(error::patch::invalid_rule(i + 1, "'from' must not be empty"));
            }
        }
        Ok(())
    }
}

/// Attach the file path to a parse error raised without one
pub(crate) fn with_path(err: AssetError, path: &Path) -> AssetError {
    match err {
        AssetError::ConfigParseFailed { reason, .. } => {
            error::config::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_JPEG_DIMENSION).contains(&self.max_dimension) {
            return Err(error::config::invalid(format!(
                "max_dimension must be between 1 and {}, got {}",
                MAX_JPEG_DIMENSION, self.max_dimension
            )));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(error::config::invalid(format!(
                "quality must be between 1 and 100, got {}",
                self.quality
            )));
        }
        if self.suffix.is_empty() {
            return Err(error::config::invalid("suffix must not be empty"));
        }
        if self.extensions.iter().all(|e| normalize_ext(e).is_empty()) {
            return Err(error::config::invalid("at least one extension is required"));
        }
        for pattern in &self.exclude {
            if let Err(e) = Glob::new(pattern) {
                return Err(error::config::invalid(format!(
                    "invalid exclude pattern '{pattern}': {e}"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the backup folder for a source directory
    pub fn backup_dir_for(&self, source_dir: &Path) -> PathBuf {
        if self.backup_dir.is_absolute() {
            self.backup_dir.clone()
        } else {
            source_dir.join(&self.backup_dir)
        }
    }

    /// File stem with a recognized extension stripped, or `None` when the
    /// name does not end in one
    pub fn image_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        self.extensions
            .iter()
            .any(|known| normalize_ext(known).eq_ignore_ascii_case(ext))
            .then_some(stem)
    }

    /// Optimized output name for an input (`photo.png` -> `photo_optimized.jpg`)
    pub fn output_name(&self, file_name: &str) -> Option<String> {
        self.image_stem(file_name)
            .map(|stem| format!("{}{}.{}", stem, self.suffix, OUTPUT_EXTENSION))
    }

    /// Whether `file_name` looks like an output of a previous run.
    ///
    /// Outputs are always `<stem><suffix>.jpg`, so `banner_optimized.png`
    /// or `x_optimized.jpeg` are inputs like any other.
    pub fn is_output_name(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| {
                ext.eq_ignore_ascii_case(OUTPUT_EXTENSION)
                    && stem.len() > self.suffix.len()
                    && stem.ends_with(&self.suffix)
            })
    }
}

fn normalize_ext(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}
