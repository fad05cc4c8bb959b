// ============================================================================
// clipforge-core/src/processing/download.rs
// ============================================================================
//
// DOWNLOAD ORCHESTRATION: Remote Source to Local Artifact
//
// Drives the fetch engine to materialize one local artifact per call. Each
// call mints its own identity, so concurrent calls never touch the same
// output path.
//
// AI-ASSISTANT-INFO: Download orchestration over the FetchEngine seam

use crate::artifact::{self, ArtifactNamer, ArtifactStore};
use crate::error::{CoreError, CoreResult};
use crate::external::{FetchConfig, FetchEngine, Postprocessor};
use crate::progress::{GuardedSink, LogProgressSink, ProgressSink};

use std::path::PathBuf;
use std::sync::Arc;

/// Container used when separate video and audio streams are merged.
pub const MERGE_CONTAINER: &str = "mp4";

/// Selector used for audio-only downloads, overriding any caller selector.
pub const AUDIO_ONLY_SELECTOR: &str = "bestaudio/best";

/// Codec, quality (kbps) and resample arguments for audio-only downloads.
pub const AUDIO_ONLY_CODEC: &str = "mp3";
pub const AUDIO_ONLY_QUALITY: &str = "192";
pub const AUDIO_ONLY_RESAMPLE_ARGS: [&str; 2] = ["-ar", "16000"];

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub url: String,
    /// Format-selection expression passed through to the engine unmodified.
    pub format: Option<String>,
    pub audio_only: bool,
}

impl SourceDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: None,
            audio_only: false,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn audio_only(mut self, audio_only: bool) -> Self {
        self.audio_only = audio_only;
        self
    }
}

/// A downloaded file plus the source attributes reported for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedArtifact {
    /// Basename inside the artifact store.
    pub filename: String,
    pub filepath: PathBuf,
    pub title: Option<String>,
    pub duration: Option<f64>,
}

/// Turns a [`SourceDescriptor`] into a file in the artifact store.
#[derive(Clone)]
pub struct DownloadOrchestrator {
    store: ArtifactStore,
    engine: Arc<dyn FetchEngine>,
    progress: Arc<dyn ProgressSink>,
    ffmpeg_location: Option<PathBuf>,
}

impl DownloadOrchestrator {
    pub fn new(store: ArtifactStore, engine: Arc<dyn FetchEngine>) -> Self {
        Self {
            store,
            engine,
            progress: Arc::new(LogProgressSink),
            ffmpeg_location: None,
        }
    }

    /// Replaces the default logging sink.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// ffmpeg binary the engine should use for audio extraction.
    #[must_use]
    pub fn with_ffmpeg_location(mut self, location: Option<PathBuf>) -> Self {
        self.ffmpeg_location = location;
        self
    }

    #[must_use]
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Engine configuration for one call writing to `output_template`.
    #[must_use]
    pub fn fetch_config(&self, source: &SourceDescriptor, output_template: String) -> FetchConfig {
        let mut config = FetchConfig {
            output_template: Some(output_template),
            quiet: false,
            format: source.format.clone(),
            merge_output_format: Some(MERGE_CONTAINER.to_string()),
            ..FetchConfig::default()
        };

        if source.audio_only {
            config.format = Some(AUDIO_ONLY_SELECTOR.to_string());
            config.postprocessors.push(Postprocessor::ExtractAudio {
                codec: AUDIO_ONLY_CODEC.to_string(),
                quality: AUDIO_ONLY_QUALITY.to_string(),
            });
            config.postprocessor_args = AUDIO_ONLY_RESAMPLE_ARGS
                .iter()
                .map(ToString::to_string)
                .collect();
            config.prefer_ffmpeg = true;
            config.ffmpeg_location = self.ffmpeg_location.clone();
        }
        config
    }

    /// Downloads `source` into the artifact store.
    ///
    /// Engine failures of any kind become [`CoreError::FetchFailed`] with the
    /// engine's message. Partial files are left in place.
    pub fn fetch(&self, source: &SourceDescriptor) -> CoreResult<DownloadedArtifact> {
        let identity = ArtifactNamer::new_identity();
        let config = self.fetch_config(source, identity.output_template(self.store.dir()));

        log::info!(
            "Downloading {} as {identity} (format: {}, audio only: {})",
            source.url,
            config.format.as_deref().unwrap_or("engine default"),
            source.audio_only
        );

        let progress = GuardedSink::new(self.progress.as_ref());
        let info = self
            .engine
            .extract_info(&source.url, &config, &progress)
            .map_err(|e| {
                log::error!("Download of {} failed: {e}", source.url);
                CoreError::FetchFailed(e.to_string())
            })?;

        let mut filepath = self.engine.prepare_filename(&info, &config);
        if source.audio_only {
            filepath = artifact::with_extension(&filepath, AUDIO_ONLY_CODEC);
        }
        let filename = artifact::basename(&filepath);

        log::info!("Downloaded {} to {}", source.url, filepath.display());
        Ok(DownloadedArtifact {
            filename,
            filepath,
            title: info.title,
            duration: info.duration,
        })
    }
}
