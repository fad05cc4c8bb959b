// ============================================================================
// clipforge-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Terminal Progress Bar for Downloads
//
// Renders the core's download progress events with indicatif on stderr.
// When stderr is not a terminal the bar is not used and events are logged
// instead.
//
// AI-ASSISTANT-INFO: indicatif-backed ProgressSink

use clipforge_core::file_logging::MilestoneLogSink;
use clipforge_core::progress::{LogProgressSink, ProgressEvent, ProgressSink};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;

const BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}% {msg}";

/// Progress sink drawing a percentage bar on stderr.
pub struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressBarSink {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(100), target);
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message("Downloading");
        Self { bar }
    }

    /// A merged download reports one stream after another; the next stream
    /// starts over on the same bar.
    fn restart_if_finished(&self) {
        if self.bar.is_finished() {
            self.bar.reset();
            self.bar.set_message("Downloading");
        }
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBarSink {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Downloading { percent: Some(p) } => {
                self.restart_if_finished();
                self.bar.set_position(p.clamp(0.0, 100.0).round() as u64);
            }
            ProgressEvent::Downloading { percent: None } => {
                self.restart_if_finished();
                self.bar.tick();
            }
            ProgressEvent::Finished => {
                self.bar.set_position(100);
                self.bar.finish_with_message("Download completed, post-processing...");
            }
        }
    }
}

impl Drop for ProgressBarSink {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

/// Picks the sink for this run: a bar on an interactive terminal, milestone
/// logging when a log file is being written, plain logging otherwise.
pub fn select_sink(logging_to_file: bool) -> Arc<dyn ProgressSink> {
    if logging_to_file {
        Arc::new(MilestoneLogSink::new())
    } else if console::Term::stderr().is_term() {
        Arc::new(ProgressBarSink::new())
    } else {
        Arc::new(LogProgressSink)
    }
}
