// ============================================================================
// clipforge-core/src/processing/transcode.rs
// ============================================================================
//
// TRANSCODE ORCHESTRATION: Local Artifact to Derived Artifact
//
// Converts an existing local file to another container/resolution, or strips
// and re-encodes its audio track. Every call checks the input exists before
// ffmpeg is started, writes to a freshly minted path, and reports a failing
// ffmpeg run with its stderr unmodified.
//
// AI-ASSISTANT-INFO: Conversion and audio extraction over the FfmpegRunner seam

use crate::artifact::{self, ArtifactIdentity, ArtifactNamer, ArtifactStore};
use crate::error::{CoreError, CoreResult};
use crate::external::FfmpegRunner;
use crate::external::ffmpeg::{
    ConvertParams, ExtractAudioParams, build_convert_command, build_extract_audio_command,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Default target container for [`TranscodeOrchestrator::convert`].
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp4";

/// Default target for [`TranscodeOrchestrator::extract_audio`].
pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";

/// A file written by a transcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodedArtifact {
    /// Basename inside the artifact store.
    pub output_file: String,
    pub output_path: PathBuf,
}

#[derive(Clone)]
pub struct TranscodeOrchestrator {
    store: ArtifactStore,
    runner: Arc<dyn FfmpegRunner>,
    ffmpeg_path: Option<PathBuf>,
}

impl TranscodeOrchestrator {
    pub fn new(store: ArtifactStore, runner: Arc<dyn FfmpegRunner>) -> Self {
        Self {
            store,
            runner,
            ffmpeg_path: None,
        }
    }

    #[must_use]
    pub fn with_ffmpeg_path(mut self, ffmpeg_path: Option<PathBuf>) -> Self {
        self.ffmpeg_path = ffmpeg_path;
        self
    }

    #[must_use]
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Re-encodes `input_path` to H.264/AAC in `output_format`, optionally
    /// scaled to `resolution` (e.g. `1280x720`).
    pub fn convert(
        &self,
        input_path: &Path,
        output_format: &str,
        resolution: Option<&str>,
    ) -> CoreResult<TranscodedArtifact> {
        require_input(input_path)?;
        validate_format_token(output_format)?;

        let (identity, output_path) = self.target(output_format);
        log::info!(
            "Converting {} to {output_format} as {identity}{}",
            input_path.display(),
            resolution.map(|r| format!(" at {r}")).unwrap_or_default()
        );

        let cmd = build_convert_command(
            self.ffmpeg_path.as_deref(),
            &ConvertParams {
                input_path: input_path.to_path_buf(),
                output_path: output_path.clone(),
                resolution: resolution.map(str::to_string),
            },
        );
        self.execute(cmd, output_path)
    }

    /// Writes the audio track of `input_path` as `audio_format`. MP3 is
    /// re-encoded; any other format copies the source stream.
    pub fn extract_audio(&self, input_path: &Path, audio_format: &str) -> CoreResult<TranscodedArtifact> {
        require_input(input_path)?;
        validate_format_token(audio_format)?;

        let (identity, output_path) = self.target(audio_format);
        log::info!(
            "Extracting {audio_format} audio from {} as {identity}",
            input_path.display()
        );

        let cmd = build_extract_audio_command(
            self.ffmpeg_path.as_deref(),
            &ExtractAudioParams {
                input_path: input_path.to_path_buf(),
                output_path: output_path.clone(),
                audio_format: audio_format.to_string(),
            },
        );
        self.execute(cmd, output_path)
    }

    fn target(&self, ext: &str) -> (ArtifactIdentity, PathBuf) {
        let identity = ArtifactNamer::new_identity();
        let path = self.store.path_for(&identity, ext);
        (identity, path)
    }

    fn execute(
        &self,
        cmd: ffmpeg_sidecar::command::FfmpegCommand,
        output_path: PathBuf,
    ) -> CoreResult<TranscodedArtifact> {
        let started = Instant::now();
        let outcome = self.runner.run(cmd).map_err(|e| {
            log::error!("ffmpeg could not be run: {e}");
            CoreError::TranscodeFailed(e.to_string())
        })?;

        if !outcome.success() {
            log::error!(
                "ffmpeg failed for {} after {:.1}s",
                output_path.display(),
                started.elapsed().as_secs_f64()
            );
            return Err(CoreError::TranscodeFailed(outcome.diagnostic("ffmpeg")));
        }

        log::info!(
            "Wrote {} in {:.1}s",
            output_path.display(),
            started.elapsed().as_secs_f64()
        );
        Ok(TranscodedArtifact {
            output_file: artifact::basename(&output_path),
            output_path,
        })
    }
}

fn require_input(input_path: &Path) -> CoreResult<()> {
    if input_path.exists() {
        Ok(())
    } else {
        log::warn!("Input {} does not exist", input_path.display());
        Err(CoreError::NotFound(input_path.to_path_buf()))
    }
}

/// Format tokens become file extensions, so they must stay a single plain
/// path component.
fn validate_format_token(token: &str) -> CoreResult<()> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(CoreError::InvalidArgument(format!(
            "format must be alphanumeric, got {token:?}"
        )))
    }
}
