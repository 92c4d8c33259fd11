use clap::Parser;
use std::path::PathBuf;

/// Arguments for the patch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Apply rules from a file:\n    assetkit patch utils/mediaUtils.js --rules rules.yaml\n\n\
                  Apply a single replacement:\n    assetkit patch README.md --from 'colour' --to 'color'\n\n\
                  Count matches only:\n    assetkit patch README.md --rules rules.yaml --dry-run")]
pub struct PatchArgs {
    /// File to patch in place
    pub file: PathBuf,

    /// YAML file with a list of {from, to} replacements
    #[arg(long, short = 'r', value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Literal text to search for (pair each with --to)
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub from: Vec<String>,

    /// Replacement text for the --from at the same position
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub to: Vec<String>,

    /// Do not keep a <FILE>.bak copy of the original
    #[arg(long)]
    pub no_backup: bool,

    /// Report match counts without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
