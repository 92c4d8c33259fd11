//! Diagnostic logging setup
//!
//! User-facing report lines go to stdout through `println!`. The `log` facade
//! carries diagnostics (skipped files, backup decisions, timings) to stderr.

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the global `--verbose` / `--quiet` flags
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging; a second initialization in the same process is ignored
pub fn init(verbose: bool, quiet: bool) -> LevelFilter {
    let level = level_for(verbose, quiet);

    let _ = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init();

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Warn);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(true, true), LevelFilter::Error);
    }
}
