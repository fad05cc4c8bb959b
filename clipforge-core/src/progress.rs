// ============================================================================
// clipforge-core/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Download Lifecycle Notifications
//
// The fetch engine reports coarse lifecycle events while a download runs.
// Consumers register a ProgressSink to receive them; delivery goes through
// notify_safely so a misbehaving sink can never fail the download.
//
// KEY COMPONENTS:
// - ProgressEvent: closed set of lifecycle events
// - ProgressSink: observer trait (closures implement it too)
// - LogProgressSink / NullProgressSink: stock implementations
//
// AI-ASSISTANT-INFO: Progress notification types and safe delivery

// ---- Standard library imports ----
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

// ============================================================================
// PROGRESS EVENTS
// ============================================================================

/// Lifecycle event reported during a fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// Payload bytes are arriving. `percent` is `None` when the engine cannot
    /// tell the total size.
    Downloading { percent: Option<f32> },

    /// Payload retrieval is complete; postprocessing is about to start.
    Finished,
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Downloading { percent: Some(p) } => write!(f, "Downloading: {p:.1}%"),
            Self::Downloading { percent: None } => write!(f, "Downloading: N/A"),
            Self::Finished => write!(f, "Download completed, post-processing..."),
        }
    }
}

// ============================================================================
// PROGRESS SINKS
// ============================================================================

/// Receives progress events synchronously on the thread running the fetch.
///
/// Implementations should return quickly; the engine is paused while
/// `on_progress` runs.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn on_progress(&self, event: &ProgressEvent) {
        self(event);
    }
}

/// Sink that writes every event to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn on_progress(&self, event: &ProgressEvent) {
        log::info!(target: "clipforge::progress", "{event}");
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

/// Delivers `event` to `sink`, swallowing any panic raised by the sink.
pub fn notify_safely(sink: &dyn ProgressSink, event: &ProgressEvent) {
    let delivered = panic::catch_unwind(AssertUnwindSafe(|| sink.on_progress(event)));
    if delivered.is_err() {
        log::debug!("Progress sink panicked on {event:?}; event dropped");
    }
}

/// Wraps a sink so every delivery goes through [`notify_safely`], whatever
/// the engine on the other side does with it.
pub struct GuardedSink<'a> {
    inner: &'a dyn ProgressSink,
}

impl<'a> GuardedSink<'a> {
    pub fn new(inner: &'a dyn ProgressSink) -> Self {
        Self { inner }
    }
}

impl ProgressSink for GuardedSink<'_> {
    fn on_progress(&self, event: &ProgressEvent) {
        notify_safely(self.inner, event);
    }
}

/// Parses a percent string such as `" 42.3%"`, `"100%"` or `"NA"`.
#[must_use]
pub fn parse_percent(raw: &str) -> Option<f32> {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|p| p.is_finite())
}
