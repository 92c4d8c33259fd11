//! assetkit - batch image optimizer and literal text patcher
//!
//! Shrinks directories of PNG/JPEG images into quality-reduced JPEGs while
//! keeping untouched backups, and applies search/replace rules to text files.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod hash;
mod logging;
mod optimizer;
mod patcher;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalOptions;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        config: cli.config,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Optimize(args) => commands::optimize::run(&global, args),
        Commands::Patch(args) => commands::patch::run(&global, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
