// ============================================================================
// clipforge-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with yt-dlp and ffmpeg
//
// This module encapsulates every external command-line tool the core drives.
// Each tool sits behind a trait so the orchestrators can be exercised with
// recording doubles, while the production implementations run the real
// binaries as child processes.
//
// KEY COMPONENTS:
// - FetchEngine / YtDlpEngine: remote-media resolution and retrieval
// - FfmpegRunner / SidecarRunner: transcode execution
// - ffmpeg: argument vectors for conversions and audio extraction
// - check_dependency: startup availability check
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for yt-dlp/ffmpeg

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Fetch-engine trait and the configuration passed across it
pub mod fetch_engine;

/// Argument building for ffmpeg conversions and audio extraction
pub mod ffmpeg;

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// yt-dlp child-process engine
pub mod ytdlp;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use fetch_engine::{
    ExtractedInfo, FetchConfig, FetchEngine, FormatVariant, Postprocessor, RequestedDownload,
};
pub use ffmpeg_executor::{FfmpegRunner, SidecarRunner};
pub use ytdlp::YtDlpEngine;

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `program` can be started with `version_arg`.
///
/// Returns the first line the tool printed (its version banner) on success.
/// A missing binary maps to [`CoreError::NotFound`]. A binary that starts but
/// exits non-zero is reported as an I/O error carrying its stderr.
pub fn check_dependency(program: &Path, version_arg: &str) -> CoreResult<String> {
    let output = Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let version = stdout.lines().next().unwrap_or_default().trim().to_string();
            log::debug!("Found dependency {}: {version}", program.display());
            Ok(version)
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!(
                "Dependency '{}' exited with {:?}",
                program.display(),
                output.status.code()
            );
            Err(CoreError::Io(io::Error::other(format!(
                "{} {version_arg} failed: {stderr}",
                program.display()
            ))))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", program.display());
            Err(CoreError::NotFound(program.to_path_buf()))
        }
        Err(e) => {
            log::error!(
                "Failed to start dependency check command '{}': {e}",
                program.display()
            );
            Err(CoreError::CommandStart(program.display().to_string(), e))
        }
    }
}
