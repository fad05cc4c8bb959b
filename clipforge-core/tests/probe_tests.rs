// clipforge-core/tests/probe_tests.rs

mod common;

use clipforge_core::error::ErrorKind;
use clipforge_core::external::FormatVariant;
use clipforge_core::processing::MetadataProbe;
use clipforge_core::record::MetadataRecord;
use common::{MockFetchEngine, shared, video_info};

#[test]
fn test_probe_uses_discovery_mode() {
    let engine = shared(MockFetchEngine::returning(video_info("Clip", Some(30.5), "mp4")));
    let metadata = MetadataProbe::new(engine.clone())
        .probe("https://example.com/v")
        .unwrap();

    let (url, config) = engine.calls().pop().unwrap();
    assert_eq!(url, "https://example.com/v");
    assert!(config.quiet && config.no_warnings && config.skip_download);
    assert_eq!(config.output_template, None);
    assert_eq!(metadata.title.as_deref(), Some("Clip"));
    assert_eq!(metadata.duration, Some(30.5));
}

#[test]
fn test_probe_projects_formats() {
    let mut info = video_info("Clip", None, "mp4");
    info.uploader = Some("Someone".into());
    info.thumbnail = Some("https://example.com/t.jpg".into());
    info.formats = vec![
        FormatVariant {
            format_id: Some("18".into()),
            ext: Some("mp4".into()),
            height: Some(360),
            ..FormatVariant::default()
        },
        FormatVariant {
            format_id: Some("140".into()),
            ext: Some("m4a".into()),
            vcodec: Some("none".into()),
            ..FormatVariant::default()
        },
    ];
    let engine = shared(MockFetchEngine::returning(info));

    let metadata = MetadataProbe::new(engine).probe("https://example.com/v").unwrap();
    assert_eq!(metadata.duration, None);
    assert_eq!(metadata.uploader.as_deref(), Some("Someone"));
    assert_eq!(metadata.formats.len(), 2);
    assert_eq!(metadata.formats[1].format_id.as_deref(), Some("140"));
}

#[test]
fn test_unresolvable_source() {
    let stderr = "ERROR: [youtube] xyz: Video unavailable";
    let engine = shared(MockFetchEngine::failing(stderr));

    let err = MetadataProbe::new(engine)
        .probe("https://example.com/gone")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    assert_eq!(err.to_string(), stderr);
}

#[test]
fn test_silent_engine_failure_still_reports_error() {
    let engine = shared(MockFetchEngine::killed());

    let result = MetadataProbe::new(engine).probe("https://example.com/v");
    let record = MetadataRecord::from(&result);
    assert!(!record.success);
    assert_eq!(
        record.error.as_deref(),
        Some("fetch engine was terminated by a signal")
    );
}
