// ============================================================================
// clipforge-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Uniform Failure Type for Every Orchestration Call
//
// Every public operation returns `CoreResult<T>`. The tool-facing variants
// carry the external tool's own diagnostic text unmodified, so the message a
// caller sees is exactly what yt-dlp or ffmpeg printed.
//
// KEY COMPONENTS:
// - CoreError: the failure half of every operation result
// - ErrorKind: the closed taxonomy callers match on
// - EngineError: failures raised at the fetch-engine boundary
//
// AI-ASSISTANT-INFO: Error types for clipforge-core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Classification of a [`CoreError`], used by callers that need to branch on
/// the failure without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The fetch engine could not resolve or parse a remote source.
    SourceUnavailable,
    /// Download or postprocessing failed after the engine started.
    FetchFailed,
    /// A caller-supplied local path does not exist.
    NotFound,
    /// The transcode child process exited non-zero.
    TranscodeFailed,
    /// A caller-supplied argument was rejected before any tool ran.
    InvalidArgument,
    /// Filesystem or process plumbing failed outside a tool run.
    Io,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    SourceUnavailable(String),

    #[error("{0}")]
    FetchFailed(String),

    /// The path is kept for logging; the display text stays fixed.
    #[error("File not found")]
    NotFound(PathBuf),

    #[error("{0}")]
    TranscodeFailed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed to wait for {0}: {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceUnavailable(_) => ErrorKind::SourceUnavailable,
            Self::FetchFailed(_) => ErrorKind::FetchFailed,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::TranscodeFailed(_) => ErrorKind::TranscodeFailed,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::CommandStart(..) | Self::CommandWait(..) | Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for clipforge-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Failures reported by a [`crate::external::FetchEngine`] implementation.
///
/// The orchestrators translate these into [`CoreError::SourceUnavailable`] or
/// [`CoreError::FetchFailed`] depending on which operation was running.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The engine exited unsuccessfully; `stderr` is its error channel verbatim.
    #[error("{}", exited_text("fetch engine", .code, .stderr))]
    Exited { code: Option<i32>, stderr: String },

    #[error("Unreadable engine output: {0}")]
    Output(String),
}

// ---- Helper constructors ----

/// Status line for a tool that failed without printing anything.
pub fn exit_status_message(tool: &str, code: Option<i32>) -> String {
    match code {
        Some(code) => format!("{tool} exited with status {code}"),
        None => format!("{tool} was terminated by a signal"),
    }
}

/// The tool's diagnostic text, or its exit status when that text is blank.
pub fn exited_text(tool: &str, code: &Option<i32>, stderr: &str) -> String {
    if stderr.trim().is_empty() {
        exit_status_message(tool, *code)
    } else {
        stderr.to_string()
    }
}

pub fn command_start_error(cmd: impl Into<String>, e: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), e)
}

pub fn command_wait_error(cmd: impl Into<String>, e: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), e)
}
