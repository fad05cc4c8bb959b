//! File logging: log4rs setup plus a progress sink suited to log files.

pub mod setup;

pub use setup::{log_file_name, setup_file_logging};

use crate::progress::{ProgressEvent, ProgressSink};
use log::info;
use std::sync::{Mutex, PoisonError};

/// Percent step between logged download progress lines.
const MILESTONE_STEP: f32 = 10.0;

/// Progress sink that logs download progress at fixed milestones instead of
/// on every engine update, keeping log files readable.
#[derive(Debug, Default)]
pub struct MilestoneLogSink {
    last_logged: Mutex<Option<f32>>,
}

impl MilestoneLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn should_log(&self, percent: f32) -> bool {
        let mut last = self
            .last_logged
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let milestone = (percent / MILESTONE_STEP).floor() * MILESTONE_STEP;
        match *last {
            Some(prev) if milestone <= prev => false,
            _ => {
                *last = Some(milestone);
                true
            }
        }
    }
}

impl ProgressSink for MilestoneLogSink {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Downloading { percent: Some(p) } => {
                if self.should_log(*p) {
                    info!(target: "clipforge::progress", "{event}");
                }
            }
            ProgressEvent::Downloading { percent: None } => {}
            ProgressEvent::Finished => {
                *self
                    .last_logged
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = None;
                info!(target: "clipforge::progress", "{event}");
            }
        }
    }
}
