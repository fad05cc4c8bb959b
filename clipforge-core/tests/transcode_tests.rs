// clipforge-core/tests/transcode_tests.rs

mod common;

use clipforge_core::artifact::ArtifactStore;
use clipforge_core::error::ErrorKind;
use clipforge_core::processing::TranscodeOrchestrator;
use clipforge_core::util::ProcessOutcome;
use common::{MockFfmpegRunner, create_dummy_file, from_input, shared};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::tempdir;

fn orchestrator(dir: &Path, runner: &Arc<MockFfmpegRunner>) -> TranscodeOrchestrator {
    TranscodeOrchestrator::new(ArtifactStore::new(dir), runner.clone())
}

#[test]
fn test_convert_missing_input_never_runs_ffmpeg() {
    let dir = tempdir().unwrap();
    let runner = shared(MockFfmpegRunner::succeeding());
    let missing = dir.path().join("nope.webm");

    let err = orchestrator(dir.path(), &runner)
        .convert(&missing, "mp4", None)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "File not found");
    assert!(runner.calls().is_empty());
}

#[test]
fn test_extract_audio_missing_input_never_runs_ffmpeg() {
    let dir = tempdir().unwrap();
    let runner = shared(MockFfmpegRunner::succeeding());

    let err = orchestrator(dir.path(), &runner)
        .extract_audio(&dir.path().join("nope.mp4"), "mp3")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_missing_input_reported_before_bad_format() {
    let dir = tempdir().unwrap();
    let runner = shared(MockFfmpegRunner::succeeding());

    let err = orchestrator(dir.path(), &runner)
        .convert(&dir.path().join("nope.mp4"), "../../etc", None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_convert_argument_vector() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.webm");
    let runner = shared(MockFfmpegRunner::succeeding());

    let artifact = orchestrator(dir.path(), &runner)
        .convert(&input, "mp4", None)
        .unwrap();

    let output = artifact.output_path.to_string_lossy().into_owned();
    assert_eq!(
        from_input(&runner.last_args()),
        [
            "-i",
            input.to_str().unwrap(),
            "-c:v",
            "libx264",
            "-preset",
            "medium",
            "-crf",
            "23",
            "-c:a",
            "aac",
            "-b:a",
            "128k",
            output.as_str(),
            "-y",
        ]
    );
    assert_eq!(artifact.output_path.parent(), Some(dir.path()));
    assert!(artifact.output_file.ends_with(".mp4"));
    assert_eq!(
        artifact.output_path,
        PathBuf::from(dir.path()).join(&artifact.output_file)
    );
}

#[test]
fn test_convert_with_resolution_adds_scale_filter() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let runner = shared(MockFfmpegRunner::succeeding());

    let artifact = orchestrator(dir.path(), &runner)
        .convert(&input, "mkv", Some("1280x720"))
        .unwrap();

    let args = from_input(&runner.last_args());
    assert_eq!(&args[2..4], ["-vf", "scale=1280x720"]);
    assert!(artifact.output_file.ends_with(".mkv"));
}

#[test]
fn test_extract_mp3_uses_libmp3lame() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let runner = shared(MockFfmpegRunner::succeeding());

    let artifact = orchestrator(dir.path(), &runner)
        .extract_audio(&input, "mp3")
        .unwrap();

    let output = artifact.output_path.to_string_lossy().into_owned();
    assert_eq!(
        from_input(&runner.last_args()),
        [
            "-i",
            input.to_str().unwrap(),
            "-vn",
            "-acodec",
            "libmp3lame",
            "-ab",
            "192k",
            "-ar",
            "44100",
            "-y",
            output.as_str(),
        ]
    );
    assert!(artifact.output_file.ends_with(".mp3"));
}

#[test]
fn test_extract_other_format_copies_stream() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let runner = shared(MockFfmpegRunner::succeeding());

    let artifact = orchestrator(dir.path(), &runner)
        .extract_audio(&input, "m4a")
        .unwrap();

    let args = from_input(&runner.last_args());
    assert_eq!(&args[3..5], ["-acodec", "copy"]);
    assert!(artifact.output_file.ends_with(".m4a"));
}

#[test]
fn test_failure_carries_stderr_verbatim() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let stderr = "source.mp4: Invalid data found when processing input\n";
    let runner = shared(MockFfmpegRunner::failing(1, stderr));

    let err = orchestrator(dir.path(), &runner)
        .convert(&input, "mp4", None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TranscodeFailed);
    assert_eq!(err.to_string(), stderr);

    let err = orchestrator(dir.path(), &runner)
        .extract_audio(&input, "mp3")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TranscodeFailed);
    assert_eq!(err.to_string(), stderr);
    assert_eq!(runner.calls().len(), 2);
}

#[test]
fn test_rejects_format_tokens_that_escape_store() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let runner = shared(MockFfmpegRunner::succeeding());
    let transcoder = orchestrator(dir.path(), &runner);

    for token in ["", "../mp4", "mp4/x", "mp 4"] {
        let err = transcoder.convert(&input, token, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "token {token:?}");
    }
    let err = transcoder.extract_audio(&input, "mp3;rm").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_each_call_gets_a_new_output() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let runner = shared(MockFfmpegRunner::succeeding());
    let transcoder = orchestrator(dir.path(), &runner);

    let first = transcoder.convert(&input, "mp4", None).unwrap();
    let second = transcoder.convert(&input, "mp4", None).unwrap();
    assert_ne!(first.output_path, second.output_path);
}

#[test]
fn test_silent_ffmpeg_failure_reports_status() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");

    let runner = shared(MockFfmpegRunner::failing(1, ""));
    let err = orchestrator(dir.path(), &runner)
        .convert(&input, "mp4", None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TranscodeFailed);
    assert_eq!(err.to_string(), "ffmpeg exited with status 1");

    let killed = shared(MockFfmpegRunner::with_outcome(ProcessOutcome::default()));
    let err = orchestrator(dir.path(), &killed)
        .extract_audio(&input, "mp3")
        .unwrap_err();
    assert_eq!(err.to_string(), "ffmpeg was terminated by a signal");
}

#[test]
fn test_relative_store_yields_absolute_output_path() {
    let dir = tempdir().unwrap();
    let input = create_dummy_file(dir.path(), "source.mp4");
    let runner = shared(MockFfmpegRunner::succeeding());
    let transcoder = TranscodeOrchestrator::new(ArtifactStore::new("artifacts"), runner);

    let converted = transcoder.convert(&input, "mp4", None).unwrap();
    assert!(converted.output_path.is_absolute());
    let audio = transcoder.extract_audio(&input, "mp3").unwrap();
    assert!(audio.output_path.is_absolute());
}
