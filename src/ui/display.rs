//! Display functions for optimize and patch results
//!
//! Output goes to stdout and is styled with `console`, which drops the
//! colors on its own when stdout is not a terminal.

use console::Style;

use crate::optimizer::report::to_kb;
use crate::optimizer::{BackupStatus, OptimizeSummary, SkipReason};
use crate::patcher::PatchOutcome;

/// Display the result of an optimize run
pub fn display_optimize_summary(summary: &OptimizeSummary, verbose: bool) {
    if summary.dry_run {
        display_planned(summary);
        return;
    }

    for report in &summary.optimized {
        if report.grew() {
            println!(
                "{} {}",
                Style::new().yellow().apply_to(report.summary_line()),
                Style::new().yellow().bold().apply_to("(output is larger)")
            );
        } else {
            println!("{}", report.summary_line());
        }

        if report.backup == BackupStatus::Mismatch {
            println!(
                "  {} existing backup differs from the original",
                Style::new().yellow().bold().apply_to("warning:")
            );
        }
        if verbose {
            let detail = format!(
                "{}x{} -> {}",
                report.width,
                report.height,
                report.output_path.display()
            );
            println!("  {}", Style::new().dim().apply_to(detail));
        }
    }

    display_failures(summary);

    if verbose {
        for skipped in &summary.skipped {
            let line = format!(
                "Skipped {} ({})",
                skipped.file_name,
                skip_label(skipped.reason)
            );
            println!("{}", Style::new().dim().apply_to(line));
        }
    }

    if summary.optimized.is_empty() && summary.failed.is_empty() {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "No images to optimize in {}",
                summary.directory.display()
            ))
        );
        return;
    }

    println!();
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Image optimization complete"),
        completion_counts(summary)
    );
    if !summary.optimized.is_empty() {
        println!(
            "Total: {:.1}KB -> {:.1}KB",
            to_kb(summary.total_original_bytes()),
            to_kb(summary.total_new_bytes())
        );
    }
    println!(
        "Original images were backed up to {}",
        Style::new().cyan().apply_to(summary.backup_dir.display())
    );
}

/// Display only the images that failed
pub fn display_failures(summary: &OptimizeSummary) {
    for failed in &summary.failed {
        println!("{}", Style::new().red().apply_to(failed.summary_line()));
    }
}

fn display_planned(summary: &OptimizeSummary) {
    if summary.planned.is_empty() {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "No images to optimize in {}",
                summary.directory.display()
            ))
        );
        return;
    }

    println!("{}", Style::new().bold().apply_to("Would optimize:"));
    for planned in &summary.planned {
        println!(
            "  {} -> {}",
            Style::new().cyan().apply_to(&planned.file_name),
            planned.output_path.display()
        );
    }
    println!(
        "{}",
        Style::new().dim().apply_to(format!(
            "Dry run: nothing was written (backups would go to {})",
            summary.backup_dir.display()
        ))
    );
}

/// Display the result of patching one file
pub fn display_patch_outcome(outcome: &PatchOutcome) {
    for rule in &outcome.rules {
        let count = Style::new().bold().apply_to(rule.matches);
        let label = if rule.matches == 1 { "match" } else { "matches" };
        println!("{} {} for {}", count, label, quote_rule(&rule.rule.from));
    }

    let path = outcome.path.display();
    if !outcome.changed {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("No changes needed, {path} left untouched"))
        );
        return;
    }

    if outcome.dry_run {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "Dry run: {} replacement(s) would be written to {path}",
                outcome.total_matches()
            ))
        );
        return;
    }

    if let Some(backup) = &outcome.backup {
        println!(
            "Backed up original to {}",
            Style::new().cyan().apply_to(backup.display())
        );
    }
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Patched"),
        path
    );
}

fn completion_counts(summary: &OptimizeSummary) -> String {
    let mut counts = format!("({} optimized", summary.optimized.len());
    if !summary.failed.is_empty() {
        counts.push_str(&format!(", {} failed", summary.failed.len()));
    }
    if !summary.skipped.is_empty() {
        counts.push_str(&format!(", {} skipped", summary.skipped.len()));
    }
    counts.push(')');
    counts
}

fn skip_label(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::PreviousOutput => "previous output",
        SkipReason::Excluded => "excluded",
    }
}

/// Show a rule's search text on one line, shortened when long
fn quote_rule(from: &str) -> String {
    let first_line = from.lines().next().unwrap_or_default();
    let mut shown: String = first_line.chars().take(40).collect();
    if shown.len() < from.len() {
        shown.push_str("...");
    }
    format!("\"{shown}\"")
}
