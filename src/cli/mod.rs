//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - optimize: Optimize command arguments
//! - patch: Patch command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod optimize;
pub mod patch;

pub use completions::CompletionsArgs;
pub use optimize::OptimizeArgs;
pub use patch::PatchArgs;

/// assetkit - image optimizer and text patcher
#[derive(Parser, Debug)]
#[command(
    name = "assetkit",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Batch image optimizer and literal text patcher",
    long_about = "assetkit shrinks folders of PNG/JPEG images into quality-reduced JPEGs \
                  (keeping untouched backups of the originals) and applies literal \
                  search/replace rules to single files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  assetkit optimize public/images                 \x1b[90m# Optimize every PNG/JPEG in a folder\x1b[0m\n   \
                  assetkit optimize public/images --quality 75    \x1b[90m# Trade more quality for size\x1b[0m\n   \
                  assetkit patch src/app.js --rules rules.yaml    \x1b[90m# Apply replacement rules\x1b[0m\n   \
                  assetkit patch notes.md --from foo --to bar     \x1b[90m# Apply one replacement\x1b[0m\n"
)]
pub struct Cli {
    /// Configuration file (defaults to ./assetkit.yaml when present)
    #[arg(long, short = 'c', global = true, env = "ASSETKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up, resize and re-encode the images in a directory as JPEG
    Optimize(OptimizeArgs),

    /// Apply literal search/replace rules to a file in place
    Patch(PatchArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_optimize_defaults() {
        let cli = Cli::try_parse_from(["assetkit", "optimize", "images"]).unwrap();
        match cli.command {
            Commands::Optimize(args) => {
                assert_eq!(args.dir, PathBuf::from("images"));
                assert_eq!(args.quality, None);
                assert_eq!(args.max_dimension, None);
                assert!(!args.dry_run);
                assert!(args.extensions.is_empty());
            }
            _ => panic!("Expected Optimize command"),
        }
    }

    #[test]
    fn test_cli_parsing_optimize_flags() {
        let cli = Cli::try_parse_from([
            "assetkit",
            "optimize",
            "images",
            "--quality",
            "70",
            "--max-dimension",
            "1280",
            "--ext",
            "png",
            "webp",
            "--exclude",
            "icon-*",
            "--json",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Optimize(args) => {
                assert_eq!(args.quality, Some(70));
                assert_eq!(args.max_dimension, Some(1280));
                assert_eq!(args.extensions, vec!["png", "webp"]);
                assert_eq!(args.exclude, vec!["icon-*"]);
                assert!(args.json);
                assert!(args.strict);
            }
            _ => panic!("Expected Optimize command"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_quality() {
        assert!(Cli::try_parse_from(["assetkit", "optimize", "images", "--quality", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["assetkit", "optimize", "images", "--quality", "101"]).is_err()
        );
    }

    #[test]
    fn test_cli_parsing_patch_pairs() {
        let cli = Cli::try_parse_from([
            "assetkit", "patch", "app.js", "--from", "a", "--to", "b", "--from", "-x", "--to",
            "-y",
        ])
        .unwrap();
        match cli.command {
            Commands::Patch(args) => {
                assert_eq!(args.file, PathBuf::from("app.js"));
                assert_eq!(args.from, vec!["a", "-x"]);
                assert_eq!(args.to, vec!["b", "-y"]);
                assert!(!args.no_backup);
            }
            _ => panic!("Expected Patch command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["assetkit", "-v", "-c", "/tmp/assetkit.yaml", "version"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/assetkit.yaml")));
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["assetkit", "-v", "-q", "version"]).is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["assetkit", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
