// ============================================================================
// clipforge-core/src/external/ytdlp.rs
// ============================================================================
//
// YT-DLP ENGINE: FetchEngine Implementation Backed by the yt-dlp CLI
//
// Translates a FetchConfig into a yt-dlp argument vector, runs yt-dlp as a
// child process, forwards its progress lines to the registered sink and
// parses the single JSON info document it prints on stdout.
//
// PROTOCOL:
// - `--dump-single-json` makes yt-dlp print one JSON document on stdout and
//   moves all screen output to stderr.
// - `--no-simulate` keeps the download going despite the JSON dump.
// - `--progress-template` emits machine-readable progress lines on stderr,
//   prefixed with PROGRESS_MARKER.
//
// AI-ASSISTANT-INFO: yt-dlp process wrapper implementing FetchEngine

use super::fetch_engine::{ExtractedInfo, FetchConfig, FetchEngine, Postprocessor};
use crate::error::{CoreError, EngineError, exited_text};
use crate::progress::{ProgressEvent, ProgressSink, notify_safely, parse_percent};
use crate::util::command::{ProcessOutcome, run_command_streaming};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Prefix of the progress lines requested through `--progress-template`.
pub const PROGRESS_MARKER: &str = "[clipforge-progress]";

const PROGRESS_TEMPLATE: &str =
    "download:[clipforge-progress] %(progress.status)s %(progress._percent_str)s";

/// FetchEngine that shells out to the yt-dlp executable.
#[derive(Debug, Clone)]
pub struct YtDlpEngine {
    program: PathBuf,
}

impl Default for YtDlpEngine {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_YTDLP_PROGRAM)
    }
}

impl YtDlpEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

/// Builds the yt-dlp argument vector for `url` under `config`.
///
/// Options left unset in `config` produce no flag at all, so yt-dlp applies
/// its own defaults.
#[must_use]
pub fn build_args(url: &str, config: &FetchConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    let mut push = |a: &str| args.push(OsString::from(a));

    push("--dump-single-json");
    if config.skip_download {
        push("--skip-download");
    } else {
        push("--no-simulate");
        push("--newline");
        push("--progress");
        push("--progress-template");
        push(PROGRESS_TEMPLATE);
    }

    if config.quiet {
        push("--quiet");
    }
    if config.no_warnings {
        push("--no-warnings");
    }
    if let Some(template) = &config.output_template {
        push("--output");
        push(template);
    }
    if let Some(format) = &config.format {
        push("--format");
        push(format);
    }
    if let Some(container) = &config.merge_output_format {
        push("--merge-output-format");
        push(container);
    }

    for pp in &config.postprocessors {
        match pp {
            Postprocessor::ExtractAudio { codec, quality } => {
                push("--extract-audio");
                push("--audio-format");
                push(codec);
                push("--audio-quality");
                push(&format!("{quality}K"));
            }
        }
    }

    if !config.postprocessor_args.is_empty() {
        push("--postprocessor-args");
        push(&config.postprocessor_args.join(" "));
    }
    if config.prefer_ffmpeg {
        push("--prefer-ffmpeg");
    }

    if let Some(location) = &config.ffmpeg_location {
        args.push(OsString::from("--ffmpeg-location"));
        args.push(location.as_os_str().to_os_string());
    }

    args.push(OsString::from("--"));
    args.push(OsString::from(url));
    args
}

/// Parses one progress line emitted through [`PROGRESS_TEMPLATE`].
#[must_use]
pub fn parse_progress_line(line: &str) -> Option<ProgressEvent> {
    let rest = line.trim().strip_prefix(PROGRESS_MARKER)?.trim_start();
    let (status, percent) = match rest.split_once(char::is_whitespace) {
        Some((status, percent)) => (status, percent),
        None => (rest, ""),
    };
    match status {
        "downloading" => Some(ProgressEvent::Downloading {
            percent: parse_percent(percent),
        }),
        "finished" => Some(ProgressEvent::Finished),
        _ => None,
    }
}

/// Removes progress lines so only the engine's diagnostics remain.
fn diagnostics(stderr: &str) -> String {
    stderr
        .lines()
        .filter(|line| !line.trim_start().starts_with(PROGRESS_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Picks the JSON document out of stdout; yt-dlp prints it as the last line.
/// Failure for an unsuccessful run, never with an empty message.
fn exit_error(outcome: &ProcessOutcome) -> EngineError {
    EngineError::Exited {
        code: outcome.code,
        stderr: exited_text("yt-dlp", &outcome.code, &diagnostics(&outcome.stderr)),
    }
}

fn parse_info(stdout: &str) -> Result<ExtractedInfo, EngineError> {
    let document = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with('{'))
        .ok_or_else(|| EngineError::Output("no info document on stdout".to_string()))?;
    serde_json::from_str(document).map_err(|e| EngineError::Output(e.to_string()))
}

impl FetchEngine for YtDlpEngine {
    fn extract_info(
        &self,
        url: &str,
        config: &FetchConfig,
        progress: &dyn ProgressSink,
    ) -> Result<ExtractedInfo, EngineError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(build_args(url, config));

        let outcome = run_command_streaming(&mut cmd, "yt-dlp", |line| {
            if let Some(event) = parse_progress_line(line) {
                notify_safely(progress, &event);
            }
        })
        .map_err(|e| match e {
            CoreError::CommandStart(_, source) => EngineError::Spawn {
                program: self.program.display().to_string(),
                source,
            },
            other => EngineError::Output(other.to_string()),
        })?;

        if !outcome.success() {
            return Err(exit_error(&outcome));
        }

        let info = parse_info(&outcome.stdout)?;
        log::debug!(
            "yt-dlp resolved {url}: title={:?} duration={:?} formats={}",
            info.title,
            info.duration,
            info.formats.len()
        );
        Ok(info)
    }

    fn prepare_filename(&self, info: &ExtractedInfo, config: &FetchConfig) -> PathBuf {
        if let Some(name) = &info.filename {
            return PathBuf::from(name);
        }
        // Older yt-dlp releases omit `_filename` but still report the
        // requested download; its path already reflects any merge.
        if let Some(path) = info
            .requested_downloads
            .first()
            .and_then(|d| d.filepath.clone())
        {
            if !config.extracts_audio() {
                return path;
            }
        }
        let template = config
            .output_template
            .as_deref()
            .unwrap_or(crate::artifact::EXT_PLACEHOLDER);
        let ext = info.ext.as_deref().unwrap_or("NA");
        PathBuf::from(template.replace(crate::artifact::EXT_PLACEHOLDER, ext))
    }
}
