//! Optimize command implementation
//!
//! Layers the command-line flags over the `optimize` section of the
//! configuration, runs the [`Optimizer`] and prints its summary.

use log::info;

use crate::cli::OptimizeArgs;
use crate::commands::GlobalOptions;
use crate::config::OptimizerConfig;
use crate::error::{self, Result};
use crate::optimizer::{OptimizeOptions, Optimizer};
use crate::ui::{self, display};

/// Run optimize command
pub fn run(global: &GlobalOptions, args: OptimizeArgs) -> Result<()> {
    let mut config = global.load_config()?.optimize;
    apply_overrides(&mut config, &args);

    let options = OptimizeOptions {
        verify_backups: args.verify_backups,
        dry_run: args.dry_run,
    };
    let optimizer = Optimizer::new(&args.dir, &config, options);

    info!(
        "optimizing {} (max {}px, quality {})",
        args.dir.display(),
        config.max_dimension,
        config.quality
    );

    let mut progress = ui::reporter_for(global.quiet, args.json);
    let summary = match optimizer.run(progress.as_mut()) {
        Ok(summary) => summary,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    if args.json {
        println!("{}", summary.to_json()?);
    } else if global.quiet {
        display::display_failures(&summary);
    } else {
        display::display_optimize_summary(&summary, global.verbose);
    }

    if args.strict && summary.has_failures() {
        return Err(error::image::images_failed(summary.failed.len()));
    }
    Ok(())
}

/// Flags win over the configuration file; `--exclude` adds to the file's list
fn apply_overrides(config: &mut OptimizerConfig, args: &OptimizeArgs) {
    if let Some(dir) = &args.backup_dir {
        config.backup_dir.clone_from(dir);
    }
    if let Some(max) = args.max_dimension {
        config.max_dimension = max;
    }
    if let Some(quality) = args.quality {
        config.quality = quality;
    }
    if let Some(suffix) = &args.suffix {
        config.suffix.clone_from(suffix);
    }
    if !args.extensions.is_empty() {
        config.extensions.clone_from(&args.extensions);
    }
    config.exclude.extend(args.exclude.iter().cloned());
}
