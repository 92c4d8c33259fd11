//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while images are being optimized
//! - Interactive progress bars using indicatif
//! - Silent progress for quiet, JSON and non-terminal output
//! - Console rendering of optimize and patch results ([`display`])

pub mod display;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for long-running operations
pub trait ProgressReporter {
    /// Start tracking `total` files
    fn start(&mut self, total: u64);

    /// Show the file currently being processed
    fn update_file(&mut self, file_name: &str);

    /// Mark one file as done
    fn inc(&mut self);

    /// Finish progress
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
#[derive(Default)]
pub struct InteractiveProgressReporter {
    pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total: u64) {
        let pb = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        self.pb = Some(pb);
    }

    fn update_file(&mut self, file_name: &str) {
        if let Some(ref pb) = self.pb {
            // Truncate long names for display
            let display_name = if file_name.chars().count() > 50 {
                let tail: String = file_name
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{tail}")
            } else {
                file_name.to_string()
            };
            pb.set_message(display_name);
        }
    }

    fn inc(&mut self) {
        if let Some(ref pb) = self.pb {
            pb.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.abandon();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total: u64) {}

    fn update_file(&mut self, _file_name: &str) {}

    fn inc(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter: a bar only when stderr is a terminal and output is not suppressed
pub fn reporter_for(quiet: bool, json: bool) -> Box<dyn ProgressReporter> {
    if quiet || json || !console::Term::stderr().is_term() {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;

        reporter.start(10);
        reporter.update_file("photo.png");
        reporter.inc();
        reporter.finish();
        reporter.abandon();
    }

    #[test]
    fn test_interactive_progress_reporter_creation() {
        let reporter = InteractiveProgressReporter::new();
        assert!(reporter.pb.is_none());
    }

    #[test]
    fn test_interactive_progress_reporter_inc() {
        let mut reporter = InteractiveProgressReporter::new();
        reporter.start(5);
        reporter.update_file(&"x".repeat(80));
        reporter.inc();
        reporter.inc();
        assert_eq!(reporter.pb.as_ref().map(ProgressBar::position), Some(2));
        reporter.finish();
        assert!(reporter.pb.is_none());
    }
}
