//! Patch command implementation

use log::{info, warn};

use crate::cli::PatchArgs;
use crate::commands::GlobalOptions;
use crate::config::PatchConfig;
use crate::error::{AssetError, Result};
use crate::patcher::{self, PatchOptions, PatchSet};
use crate::ui::display;

/// Run patch command
pub fn run(global: &GlobalOptions, args: PatchArgs) -> Result<()> {
    let config = global.load_config()?.patch;
    let set = collect_rules(&args, &config)?;

    for rule in set.rules().iter().filter(|r| r.reinserts_pattern()) {
        warn!(
            "rule {:?} is not idempotent: its replacement contains the search text",
            rule.from
        );
    }

    let options = PatchOptions {
        backup: config.backup && !args.no_backup,
        dry_run: args.dry_run,
    };

    info!("applying {} rule(s) to {}", set.len(), args.file.display());
    let outcome = patcher::patch_file(&args.file, &set, &options)?;
    if outcome.changed && !outcome.stable {
        warn!(
            "rules are not idempotent: applying them again would change {} further",
            outcome.path.display()
        );
    }

    if !global.quiet {
        display::display_patch_outcome(&outcome);
    }
    Ok(())
}

/// `--rules` and `--from/--to` are combined in that order; the config
/// file's rules are used only when neither is given.
fn collect_rules(args: &PatchArgs, config: &PatchConfig) -> Result<PatchSet> {
    let mut set = match &args.rules {
        Some(path) => PatchSet::load(path)?,
        None => PatchSet::default(),
    };
    set.extend(PatchSet::from_pairs(&args.from, &args.to)?);

    if set.is_empty() {
        set = PatchSet::new(config.rules.clone())?;
    }
    if set.is_empty() {
        return Err(AssetError::NoPatchRules);
    }
    Ok(set)
}
