//! Progress reporting module

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Progress bar over input documents, drawn on stderr
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the bar; a single document gets none
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed document
    pub fn file_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Whether a bar is shown
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_and_single_file_show_nothing() {
        let mut quiet = ProgressReporter::new(true);
        quiet.init_files(10);
        assert!(!quiet.is_active());

        let mut single = ProgressReporter::new(false);
        single.init_files(1);
        assert!(!single.is_active());
        single.file_completed("a.txt");
        single.finish();
    }

    #[test]
    fn test_multiple_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(2);
        assert!(reporter.is_active());
        reporter.file_completed("a.txt");
        reporter.file_completed("b.txt");
        reporter.finish();
    }
}
