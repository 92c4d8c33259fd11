//! Command implementations for the assetkit CLI

pub mod completions;
pub mod optimize;
pub mod patch;
pub mod version;

use std::path::PathBuf;

use crate::config::AssetConfig;
use crate::error::Result;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl GlobalOptions {
    /// Load `--config`, or `assetkit.yaml` from the current directory
    pub fn load_config(&self) -> Result<AssetConfig> {
        let cwd = std::env::current_dir()?;
        AssetConfig::load(self.config.as_deref(), &cwd)
    }
}
