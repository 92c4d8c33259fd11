//! Candidate discovery: which directory entries get optimized

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::OptimizerConfig;
use crate::error::{self, Result};

/// An image file that will be optimized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub output_path: PathBuf,
}

/// Why a recognized image was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Output of an earlier run (`*_optimized.jpg`)
    PreviousOutput,
    /// Matched an exclude pattern
    Excluded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// Result of scanning a source directory
#[derive(Debug, Default)]
pub struct Discovery {
    pub candidates: Vec<ImageCandidate>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan the top level of `dir` for images, sorted by file name.
///
/// Subdirectories (the backup folder included) are not entered.
pub fn discover(dir: &Path, config: &OptimizerConfig) -> Result<Discovery> {
    let excludes = compile_excludes(&config.exclude)?;
    let mut discovery = Discovery::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            debug!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        let Some(output_name) = config.output_name(file_name) else {
            continue;
        };

        if config.is_output_name(file_name) {
            discovery.skipped.push(SkippedFile {
                file_name: file_name.to_string(),
                reason: SkipReason::PreviousOutput,
            });
            continue;
        }

        let candidate_path = CandidatePath::from(file_name);
        if excludes
            .iter()
            .any(|glob| glob.matched(&candidate_path).is_some())
        {
            discovery.skipped.push(SkippedFile {
                file_name: file_name.to_string(),
                reason: SkipReason::Excluded,
            });
            continue;
        }

        discovery.candidates.push(ImageCandidate {
            path: entry.path().to_path_buf(),
            file_name: file_name.to_string(),
            output_path: dir.join(output_name),
        });
    }

    debug!(
        "found {} image(s), skipped {} in {}",
        discovery.candidates.len(),
        discovery.skipped.len(),
        dir.display()
    );
    Ok(discovery)
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Glob<'_>>> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| {
                error::config::invalid(format!("invalid exclude pattern '{pattern}': {e}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            std::fs::write(dir.join(name), b"x").unwrap();
        }
    }

    fn names(discovery: &Discovery) -> Vec<&str> {
        discovery
            .candidates
            .iter()
            .map(|c| c.file_name.as_str())
            .collect()
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["b.jpg", "a.png", "c.jpeg", "readme.md", "D.PNG", "noext"],
        );
        std::fs::create_dir(temp.path().join("backup")).unwrap();
        touch(&temp.path().join("backup"), &["a.png"]);

        let discovery = discover(temp.path(), &OptimizerConfig::default()).unwrap();
        assert_eq!(names(&discovery), vec!["D.PNG", "a.png", "b.jpg", "c.jpeg"]);
        assert_eq!(
            discovery.candidates[1].output_path,
            temp.path().join("a_optimized.jpg")
        );
    }

    #[test]
    fn test_discover_skips_previous_outputs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["photo.png", "photo_optimized.jpg"]);

        let discovery = discover(temp.path(), &OptimizerConfig::default()).unwrap();
        assert_eq!(names(&discovery), vec!["photo.png"]);
        assert_eq!(
            discovery.skipped,
            vec![SkippedFile {
                file_name: "photo_optimized.jpg".to_string(),
                reason: SkipReason::PreviousOutput,
            }]
        );
    }

    #[test]
    fn test_discover_keeps_inputs_named_like_outputs() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["banner_optimized.png", "x_optimized.jpeg", "y_optimized.jpg"],
        );

        let discovery = discover(temp.path(), &OptimizerConfig::default()).unwrap();
        assert_eq!(
            names(&discovery),
            vec!["banner_optimized.png", "x_optimized.jpeg"]
        );
        assert_eq!(
            discovery.candidates[0].output_path,
            temp.path().join("banner_optimized_optimized.jpg")
        );
        assert_eq!(discovery.skipped.len(), 1);
        assert_eq!(discovery.skipped[0].file_name, "y_optimized.jpg");
    }

    #[test]
    fn test_discover_excludes() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["logo.png", "hero.jpg", "icon-16.png"]);

        let config = OptimizerConfig {
            exclude: vec!["icon-*.png".to_string(), "logo.png".to_string()],
            ..Default::default()
        };
        let discovery = discover(temp.path(), &config).unwrap();
        assert_eq!(names(&discovery), vec!["hero.jpg"]);
        assert!(
            discovery
                .skipped
                .iter()
                .all(|s| s.reason == SkipReason::Excluded)
        );
    }

    #[test]
    fn test_discover_custom_extensions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["a.png", "b.jpg"]);

        let config = OptimizerConfig {
            extensions: vec![".png".to_string()],
            ..Default::default()
        };
        let discovery = discover(temp.path(), &config).unwrap();
        assert_eq!(names(&discovery), vec!["a.png"]);
    }
}
