// ============================================================================
// clipforge-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Running Built FFmpeg Commands to Completion
//
// The transcode orchestrator builds an FfmpegCommand and hands it to an
// FfmpegRunner. The runner blocks until ffmpeg exits and returns the exit
// code together with the captured output; interpreting that outcome is left
// to the caller.
//
// KEY COMPONENTS:
// - FfmpegRunner: trait seam for executing ffmpeg commands
// - SidecarRunner: production implementation over ffmpeg-sidecar
//
// AI-ASSISTANT-INFO: FFmpeg process execution abstraction

use crate::error::CoreResult;
use crate::util::command::{ProcessOutcome, run_command};
use ffmpeg_sidecar::command::FfmpegCommand;

/// Trait representing something that can run an ffmpeg command.
pub trait FfmpegRunner: Send + Sync {
    /// Runs `cmd` to completion, consuming it.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`ProcessOutcome::code`] with stderr captured verbatim.
    fn run(&self, cmd: FfmpegCommand) -> CoreResult<ProcessOutcome>;
}

/// Concrete implementation of `FfmpegRunner` using `ffmpeg-sidecar`.
///
/// The command is executed directly with its argument vector, never through
/// a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarRunner;

impl FfmpegRunner for SidecarRunner {
    fn run(&self, mut cmd: FfmpegCommand) -> CoreResult<ProcessOutcome> {
        run_command(cmd.as_inner_mut(), "ffmpeg")
    }
}

/// Collects the argument vector of `cmd` as owned strings.
pub fn command_args(cmd: &mut FfmpegCommand) -> Vec<String> {
    cmd.as_inner_mut()
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
