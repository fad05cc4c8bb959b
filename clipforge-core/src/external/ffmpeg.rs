//! FFmpeg command building for conversions and audio extraction
//!
//! Both commands keep a fixed argument layout so the encoder settings are
//! identical for every caller. Only the input, output, optional scale filter
//! and audio codec vary.

use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::{Path, PathBuf};

/// Video encoder settings used for every conversion.
pub const VIDEO_CODEC: &str = "libx264";
pub const VIDEO_PRESET: &str = "medium";
pub const VIDEO_CRF: &str = "23";

/// Audio encoder settings used for every conversion.
pub const CONVERT_AUDIO_CODEC: &str = "aac";
pub const CONVERT_AUDIO_BITRATE: &str = "128k";

/// Audio settings used for every extraction.
pub const EXTRACT_AUDIO_BITRATE: &str = "192k";
pub const EXTRACT_SAMPLE_RATE: &str = "44100";

/// Parameters for a container/resolution conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertParams {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Passed to the `scale` filter unmodified, e.g. `1280x720`.
    pub resolution: Option<String>,
}

/// Parameters for stripping and re-encoding an audio track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractAudioParams {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub audio_format: String,
}

/// Creates an empty command for the configured binary, or the one
/// ffmpeg-sidecar locates on its own.
#[must_use]
pub fn new_command(ffmpeg_path: Option<&Path>) -> FfmpegCommand {
    match ffmpeg_path {
        Some(path) => FfmpegCommand::new_with_path(path),
        None => FfmpegCommand::new(),
    }
}

/// The ffmpeg binary a command built with `ffmpeg_path` will run.
#[must_use]
pub fn ffmpeg_program(ffmpeg_path: Option<&Path>) -> PathBuf {
    ffmpeg_path.map_or_else(ffmpeg_sidecar::paths::ffmpeg_path, Path::to_path_buf)
}

/// Audio codec for an extraction target: MP3 is re-encoded, any other
/// container receives the source stream as-is.
#[must_use]
pub fn audio_codec_for(audio_format: &str) -> &'static str {
    if audio_format == "mp3" { "libmp3lame" } else { "copy" }
}

/// Builds `-i <in> [-vf scale=<res>] -c:v libx264 -preset medium -crf 23
/// -c:a aac -b:a 128k <out> -y`.
#[must_use]
pub fn build_convert_command(ffmpeg_path: Option<&Path>, params: &ConvertParams) -> FfmpegCommand {
    let mut cmd = new_command(ffmpeg_path);
    cmd.input(&*params.input_path.to_string_lossy());

    if let Some(resolution) = &params.resolution {
        let scale = format!("scale={resolution}");
        cmd.args(["-vf", scale.as_str()]);
    }

    cmd.args(["-c:v", VIDEO_CODEC, "-preset", VIDEO_PRESET, "-crf", VIDEO_CRF]);
    cmd.args(["-c:a", CONVERT_AUDIO_CODEC, "-b:a", CONVERT_AUDIO_BITRATE]);
    cmd.output(&*params.output_path.to_string_lossy());
    cmd.arg("-y");
    cmd
}

/// Builds `-i <in> -vn -acodec <codec> -ab 192k -ar 44100 -y <out>`.
#[must_use]
pub fn build_extract_audio_command(
    ffmpeg_path: Option<&Path>,
    params: &ExtractAudioParams,
) -> FfmpegCommand {
    let mut cmd = new_command(ffmpeg_path);
    cmd.input(&*params.input_path.to_string_lossy());
    cmd.arg("-vn");
    cmd.args(["-acodec", audio_codec_for(&params.audio_format)]);
    cmd.args(["-ab", EXTRACT_AUDIO_BITRATE, "-ar", EXTRACT_SAMPLE_RATE]);
    cmd.arg("-y");
    cmd.output(&*params.output_path.to_string_lossy());
    cmd
}
