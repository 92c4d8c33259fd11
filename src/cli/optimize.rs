use clap::Parser;
use std::path::PathBuf;

/// Arguments for the optimize command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Optimize a folder with the defaults (max 1920px, quality 85):\n    assetkit optimize public/images\n\n\
                  Smaller output, custom backup location:\n    assetkit optimize public/images --max-dimension 1280 --quality 75 --backup-dir /var/backups/images\n\n\
                  Leave icons alone:\n    assetkit optimize public/images --exclude 'icon-*.png'\n\n\
                  See what would happen:\n    assetkit optimize public/images --dry-run")]
pub struct OptimizeArgs {
    /// Directory containing the images to optimize
    pub dir: PathBuf,

    /// Backup folder for originals (relative paths resolve against DIR)
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Longest allowed side in pixels
    #[arg(long, value_name = "PIXELS")]
    pub max_dimension: Option<u32>,

    /// JPEG quality (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Marker inserted before .jpg in output file names
    #[arg(long)]
    pub suffix: Option<String>,

    /// Recognized file extensions (replaces the configured list)
    #[arg(long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Vec<String>,

    /// Glob patterns of file names to skip (added to the configured list)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Compare existing backups against the originals and warn on mismatch
    #[arg(long)]
    pub verify_backups: bool,

    /// Show what would be optimized without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero status if any image failed
    #[arg(long)]
    pub strict: bool,
}
