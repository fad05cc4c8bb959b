//! Configuration structures and constants for the clipforge-core library.
//!
//! The orchestrators are stateless apart from where artifacts go and which
//! external binaries to run, so the whole configuration fits in
//! [`ProcessorConfig`].

mod builder;
mod utils;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use builder::ProcessorConfigBuilder;

// Default constants

/// Default artifact directory, relative to the working directory.
pub const DEFAULT_ARTIFACT_DIR: &str = "downloads";

/// Default fetch engine executable, resolved through `PATH`.
pub const DEFAULT_YTDLP_PROGRAM: &str = "yt-dlp";

/// Environment variable overriding [`ProcessorConfig::artifact_dir`].
pub const ENV_ARTIFACT_DIR: &str = "CLIPFORGE_ARTIFACT_DIR";

/// Environment variable overriding [`ProcessorConfig::ytdlp_path`].
pub const ENV_YTDLP: &str = "CLIPFORGE_YTDLP";

/// Environment variable overriding [`ProcessorConfig::ffmpeg_path`].
pub const ENV_FFMPEG: &str = "CLIPFORGE_FFMPEG";

/// Main configuration structure for the clipforge-core library.
///
/// # Examples
///
/// ```rust,no_run
/// use clipforge_core::config::ProcessorConfigBuilder;
///
/// let config = ProcessorConfigBuilder::new()
///     .artifact_dir("/srv/media/downloads")
///     .ytdlp_path("/usr/local/bin/yt-dlp")
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Flat directory every produced artifact is written to
    pub artifact_dir: PathBuf,

    /// yt-dlp executable
    pub ytdlp_path: PathBuf,

    /// Optional ffmpeg executable. When unset, ffmpeg-sidecar's own lookup
    /// is used for transcodes and yt-dlp finds ffmpeg on its own.
    pub ffmpeg_path: Option<PathBuf>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            ytdlp_path: PathBuf::from(DEFAULT_YTDLP_PROGRAM),
            ffmpeg_path: None,
        }
    }
}

impl ProcessorConfig {
    /// Defaults overlaid with the `CLIPFORGE_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProcessorConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            artifact_dir: utils::lookup_path(&lookup, ENV_ARTIFACT_DIR, defaults.artifact_dir),
            ytdlp_path: utils::lookup_path(&lookup, ENV_YTDLP, defaults.ytdlp_path),
            ffmpeg_path: utils::lookup_optional_path(&lookup, ENV_FFMPEG).or(defaults.ffmpeg_path),
        }
    }
}
