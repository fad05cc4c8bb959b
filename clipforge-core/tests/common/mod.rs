// clipforge-core/tests/common/mod.rs
//
// Recording doubles for the two engine seams, shared by the integration tests.

#![allow(dead_code)]

use clipforge_core::error::EngineError;
use clipforge_core::external::ffmpeg_executor::command_args;
use clipforge_core::external::{ExtractedInfo, FetchConfig, FetchEngine, FfmpegRunner};
use clipforge_core::progress::{ProgressEvent, ProgressSink};
use clipforge_core::util::ProcessOutcome;
use clipforge_core::CoreResult;

use ffmpeg_sidecar::command::FfmpegCommand;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type Responder = dyn Fn(&str, &FetchConfig) -> Result<ExtractedInfo, EngineError> + Send + Sync;

/// Fetch engine that records every call and answers from a closure.
pub struct MockFetchEngine {
    responder: Box<Responder>,
    events: Vec<ProgressEvent>,
    calls: Mutex<Vec<(String, FetchConfig)>>,
}

impl MockFetchEngine {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, &FetchConfig) -> Result<ExtractedInfo, EngineError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            events: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Engine that resolves every URL to `info`.
    pub fn returning(info: ExtractedInfo) -> Self {
        Self::new(move |_, _| Ok(info.clone()))
    }

    /// Engine that fails every call with `stderr` as its diagnostic.
    pub fn failing(stderr: &'static str) -> Self {
        Self::new(move |_, _| {
            Err(EngineError::Exited {
                code: Some(1),
                stderr: stderr.to_string(),
            })
        })
    }

    /// Engine that fails every call with an empty diagnostic, as a tool killed
    /// by a signal does.
    pub fn killed() -> Self {
        Self::new(|_, _| {
            Err(EngineError::Exited {
                code: None,
                stderr: String::new(),
            })
        })
    }

    /// Progress events delivered before the responder runs.
    pub fn with_events(mut self, events: Vec<ProgressEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn calls(&self) -> Vec<(String, FetchConfig)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_config(&self) -> FetchConfig {
        self.calls().last().expect("engine was never called").1.clone()
    }
}

impl FetchEngine for MockFetchEngine {
    fn extract_info(
        &self,
        url: &str,
        config: &FetchConfig,
        progress: &dyn ProgressSink,
    ) -> Result<ExtractedInfo, EngineError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), config.clone()));
        // Delivered raw; the orchestrator guards the sink.
        for event in &self.events {
            progress.on_progress(event);
        }
        (self.responder)(url, config)
    }
}

/// Info document for a typical video source.
pub fn video_info(title: &str, duration: Option<f64>, ext: &str) -> ExtractedInfo {
    ExtractedInfo {
        id: Some("abc123".to_string()),
        title: Some(title.to_string()),
        duration,
        ext: Some(ext.to_string()),
        ..ExtractedInfo::default()
    }
}

/// ffmpeg runner that records argument vectors and returns a fixed outcome.
pub struct MockFfmpegRunner {
    outcome: ProcessOutcome,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockFfmpegRunner {
    pub fn succeeding() -> Self {
        Self::with_outcome(ProcessOutcome {
            code: Some(0),
            ..ProcessOutcome::default()
        })
    }

    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::with_outcome(ProcessOutcome {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    pub fn with_outcome(outcome: ProcessOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_args(&self) -> Vec<String> {
        self.calls().last().expect("ffmpeg was never run").clone()
    }
}

impl FfmpegRunner for MockFfmpegRunner {
    fn run(&self, mut cmd: FfmpegCommand) -> CoreResult<ProcessOutcome> {
        self.calls.lock().unwrap().push(command_args(&mut cmd));
        Ok(self.outcome.clone())
    }
}

/// Arguments from `-i` onwards.
pub fn from_input(args: &[String]) -> Vec<String> {
    let start = args
        .iter()
        .position(|a| a == "-i")
        .expect("no -i in argument vector");
    args[start..].to_vec()
}

pub fn create_dummy_file(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    let mut file = File::create(&path).expect("Failed to create dummy file");
    file.write_all(b"dummy content")
        .expect("Failed to write dummy content");
    path
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
