//! Fetch-engine abstraction.
//!
//! The orchestrators describe what they want in a [`FetchConfig`] and hand it
//! to a [`FetchEngine`]. The production implementation is
//! [`super::YtDlpEngine`]; tests substitute recording engines.

use crate::artifact::EXT_PLACEHOLDER;
use crate::error::EngineError;
use crate::progress::ProgressSink;

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Postprocessing step the engine runs after payload retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postprocessor {
    /// Extract the audio track and re-encode it to `codec` at `quality`
    /// (kbps for lossy codecs).
    ExtractAudio { codec: String, quality: String },
}

/// Engine configuration for a single call.
///
/// Absent options are left to the engine's own defaults; in particular a
/// `format` of `None` means no selector is passed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchConfig {
    /// Output path template containing [`EXT_PLACEHOLDER`].
    pub output_template: Option<String>,
    pub quiet: bool,
    pub no_warnings: bool,
    /// Discovery only: resolve metadata without retrieving payload bytes.
    pub skip_download: bool,
    pub format: Option<String>,
    /// Container used when separate video and audio streams are merged.
    pub merge_output_format: Option<String>,
    pub postprocessors: Vec<Postprocessor>,
    /// Extra arguments handed to the postprocessor backend.
    pub postprocessor_args: Vec<String>,
    pub prefer_ffmpeg: bool,
    /// Explicit ffmpeg binary for postprocessing.
    pub ffmpeg_location: Option<PathBuf>,
}

impl FetchConfig {
    /// Configuration for metadata-only discovery.
    #[must_use]
    pub fn discovery() -> Self {
        Self {
            quiet: true,
            no_warnings: true,
            skip_download: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn extracts_audio(&self) -> bool {
        self.postprocessors
            .iter()
            .any(|pp| matches!(pp, Postprocessor::ExtractAudio { .. }))
    }
}

/// One downloadable variant of a source, as enumerated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatVariant {
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub resolution: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub filesize: Option<u64>,
    pub tbr: Option<f64>,
    pub format_note: Option<String>,
}

/// A file the engine wrote for the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestedDownload {
    pub filepath: Option<PathBuf>,
    pub ext: Option<String>,
}

/// Info document returned by the engine for one source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    pub ext: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub formats: Vec<FormatVariant>,
    /// Filename the engine inferred before postprocessing.
    #[serde(rename = "_filename")]
    pub filename: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub requested_downloads: Vec<RequestedDownload>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trait representing something that can resolve and retrieve remote media.
pub trait FetchEngine: Send + Sync {
    /// Resolves `url` under `config`, downloading unless `config.skip_download`.
    /// Progress events go to `progress`; implementations must not let a sink
    /// failure abort the call.
    fn extract_info(
        &self,
        url: &str,
        config: &FetchConfig,
        progress: &dyn ProgressSink,
    ) -> Result<ExtractedInfo, EngineError>;

    /// The on-disk filename the engine chose for `info` before any
    /// postprocessing renamed it.
    fn prepare_filename(&self, info: &ExtractedInfo, config: &FetchConfig) -> PathBuf {
        if let Some(name) = &info.filename {
            return PathBuf::from(name);
        }
        let template = config.output_template.as_deref().unwrap_or(EXT_PLACEHOLDER);
        let ext = info.ext.as_deref().unwrap_or("NA");
        PathBuf::from(template.replace(EXT_PLACEHOLDER, ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopEngine;

    impl FetchEngine for NoopEngine {
        fn extract_info(
            &self,
            _url: &str,
            _config: &FetchConfig,
            _progress: &dyn ProgressSink,
        ) -> Result<ExtractedInfo, EngineError> {
            Ok(ExtractedInfo::default())
        }
    }

    #[test]
    fn discovery_config_skips_payload() {
        let config = FetchConfig::discovery();
        assert!(config.quiet && config.no_warnings && config.skip_download);
        assert!(config.format.is_none());
        assert!(!config.extracts_audio());
    }

    #[test]
    fn prepare_filename_renders_template_extension() {
        let config = FetchConfig {
            output_template: Some("/store/abc.%(ext)s".into()),
            ..FetchConfig::default()
        };
        let info = ExtractedInfo {
            ext: Some("mp4".into()),
            ..ExtractedInfo::default()
        };
        assert_eq!(
            NoopEngine.prepare_filename(&info, &config),
            PathBuf::from("/store/abc.mp4")
        );
    }

    #[test]
    fn prepare_filename_prefers_engine_inference() {
        let info = ExtractedInfo {
            ext: Some("mp4".into()),
            filename: Some("/store/abc.webm".into()),
            ..ExtractedInfo::default()
        };
        assert_eq!(
            NoopEngine.prepare_filename(&info, &FetchConfig::default()),
            PathBuf::from("/store/abc.webm")
        );
    }

    #[test]
    fn info_tolerates_nulls_and_unknown_fields() {
        let json = r#"{
            "id": "xyz", "title": "Clip", "duration": 12.5, "formats": null,
            "uploader": null, "view_count": 10,
            "requested_downloads": [{"filepath": "/s/a.mp4", "ext": "mp4", "other": 1}]
        }"#;
        let info: ExtractedInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title.as_deref(), Some("Clip"));
        assert_eq!(info.duration, Some(12.5));
        assert!(info.formats.is_empty());
        assert!(info.uploader.is_none());
        assert_eq!(
            info.requested_downloads[0].filepath,
            Some(PathBuf::from("/s/a.mp4"))
        );
    }
}
