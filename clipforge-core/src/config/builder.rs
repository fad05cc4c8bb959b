// ============================================================================
// clipforge-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProcessorConfig
//
// Fluent construction of ProcessorConfig. Unset fields fall back to the
// defaults in config/mod.rs, so every field is optional here.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for ProcessorConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::ProcessorConfig;

/// Builder for creating ProcessorConfig instances.
///
/// # Examples
///
/// ```rust
/// use clipforge_core::config::ProcessorConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = ProcessorConfigBuilder::new()
///     .artifact_dir("/tmp/clipforge")
///     .ffmpeg_path("/usr/bin/ffmpeg")
///     .build();
///
/// assert_eq!(config.artifact_dir, PathBuf::from("/tmp/clipforge"));
/// assert_eq!(config.ytdlp_path, PathBuf::from("yt-dlp"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfigBuilder {
    base: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Creates a new builder seeded with [`ProcessorConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded with [`ProcessorConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            base: ProcessorConfig::from_env(),
        }
    }

    /// Sets the artifact directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - The flat directory every produced artifact is written to
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base.artifact_dir = dir.into();
        self
    }

    /// Sets the yt-dlp executable.
    pub fn ytdlp_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base.ytdlp_path = path.into();
        self
    }

    /// Sets the ffmpeg executable used for transcodes and yt-dlp postprocessing.
    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base.ffmpeg_path = Some(path.into());
        self
    }

    /// Builds a ProcessorConfig instance from the builder.
    pub fn build(self) -> ProcessorConfig {
        self.base
    }
}
