//! Progress reporting module

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for files and render jobs
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

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        self.init(total_files, "files");
    }

    /// Initialize progress bar for render jobs
    pub fn init_jobs(&mut self, total_jobs: u64) {
        self.init(total_jobs, "lines");
    }

    fn init(&mut self, total: u64, unit: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} {{msg}}");
        let style = match ProgressStyle::default_bar().template(&template) {
            Ok(style) => style.progress_chars("##-"),
            Err(e) => {
                log::debug!("Falling back to the default progress style: {e}");
                ProgressStyle::default_bar()
            }
        };
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {filename}"));
            pb.inc(1);
        }
    }

    /// Update progress for a finished render job
    pub fn job_completed(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
