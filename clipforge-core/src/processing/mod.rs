//! Orchestration of probes, downloads and transcodes.
//!
//! [`MediaProcessor`] is built once from a [`ProcessorConfig`] and owns one
//! instance of each orchestrator, all sharing the same artifact store. It is
//! `Send + Sync` and meant to be shared by reference across threads.

/// Metadata discovery without payload retrieval
pub mod probe;

/// Remote source to local artifact
pub mod download;

/// Local artifact to converted artifact or audio track
pub mod transcode;

pub use download::{DownloadOrchestrator, DownloadedArtifact, SourceDescriptor};
pub use probe::{MediaMetadata, MetadataProbe};
pub use transcode::{TranscodeOrchestrator, TranscodedArtifact};

use crate::artifact::ArtifactStore;
use crate::config::ProcessorConfig;
use crate::external::{FetchEngine, FfmpegRunner, SidecarRunner, YtDlpEngine};
use crate::progress::ProgressSink;

use std::sync::Arc;

/// The three orchestrators wired to one artifact store.
#[derive(Clone)]
pub struct MediaProcessor {
    probe: MetadataProbe,
    downloader: DownloadOrchestrator,
    transcoder: TranscodeOrchestrator,
}

impl MediaProcessor {
    /// Production wiring: yt-dlp for fetching, ffmpeg-sidecar for transcodes.
    pub fn new(config: &ProcessorConfig) -> Self {
        Self::with_engines(
            config,
            Arc::new(YtDlpEngine::new(&config.ytdlp_path)),
            Arc::new(SidecarRunner),
        )
    }

    /// Wiring with caller-supplied engines.
    pub fn with_engines(
        config: &ProcessorConfig,
        engine: Arc<dyn FetchEngine>,
        runner: Arc<dyn FfmpegRunner>,
    ) -> Self {
        let store = ArtifactStore::new(&config.artifact_dir);
        Self {
            probe: MetadataProbe::new(Arc::clone(&engine)),
            downloader: DownloadOrchestrator::new(store.clone(), engine)
                .with_ffmpeg_location(config.ffmpeg_path.clone()),
            transcoder: TranscodeOrchestrator::new(store, runner)
                .with_ffmpeg_path(config.ffmpeg_path.clone()),
        }
    }

    /// Replaces the download progress sink.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.downloader = self.downloader.with_progress(progress);
        self
    }

    #[must_use]
    pub fn probe(&self) -> &MetadataProbe {
        &self.probe
    }

    #[must_use]
    pub fn downloader(&self) -> &DownloadOrchestrator {
        &self.downloader
    }

    #[must_use]
    pub fn transcoder(&self) -> &TranscodeOrchestrator {
        &self.transcoder
    }

    #[must_use]
    pub fn store(&self) -> &ArtifactStore {
        self.transcoder.store()
    }
}
