//! Progress display for dependency checks
//!
//! The classifier reports discrete events through `ProgressReporter`:
//! `start_check(name)` before a lookup, `checked(record)` once it resolves and
//! `finish()` after the last one. Lookups run one at a time, so a terminal
//! adapter can safely overwrite a single line.

use crate::domain::VersionRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Receiver of classification progress events
pub trait ProgressReporter {
    /// A lookup for `name` is about to start
    fn start_check(&mut self, name: &str);

    /// The lookup for `record.name` resolved
    fn checked(&mut self, record: &VersionRecord);

    /// All lookups are done
    fn finish(&mut self);
}

/// Spinner wrapper used for indeterminate operations
pub struct Progress {
    /// Whether progress display is enabled (disabled in quiet mode)
    enabled: bool,
    /// Current spinner
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress display
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Show a spinner with a message, replacing any current one
    pub fn spinner(&mut self, message: &str) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Update the message
    pub fn set_message(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Finish and clear the current spinner
    pub fn finish_and_clear(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
        self.bar = None;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Overwrites one spinner line with the package currently being checked
pub struct TerminalProgress {
    progress: Progress,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            progress: Progress::new(true),
        }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalProgress {
    fn start_check(&mut self, name: &str) {
        let message = format!("Checking {}...", name);
        if self.progress.bar.is_some() {
            self.progress.set_message(&message);
        } else {
            self.progress.spinner(&message);
        }
    }

    fn checked(&mut self, _record: &VersionRecord) {}

    fn finish(&mut self) {
        self.progress.finish_and_clear();
    }
}

/// Writes one log line per event, for output that is not a terminal
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn start_check(&mut self, name: &str) {
        tracing::info!("Checking {}...", name);
    }

    fn checked(&mut self, record: &VersionRecord) {
        tracing::debug!("{}", record);
    }

    fn finish(&mut self) {}
}

/// Ignores every event (quiet mode)
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start_check(&mut self, _name: &str) {}

    fn checked(&mut self, _record: &VersionRecord) {}

    fn finish(&mut self) {}
}

/// Pick a reporter for the current output
pub fn create_reporter(quiet: bool, is_terminal: bool) -> Box<dyn ProgressReporter> {
    match (quiet, is_terminal) {
        (true, _) => Box::new(SilentProgress),
        (false, true) => Box::new(TerminalProgress::new()),
        (false, false) => Box::new(LogProgress),
    }
}
