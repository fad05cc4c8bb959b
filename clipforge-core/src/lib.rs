//! Core library for fetching and transcoding media with yt-dlp and ffmpeg.
//!
//! The crate turns declarative requests into external-tool invocations,
//! names every produced file with a fresh identity inside one flat artifact
//! directory, and reports each outcome as a [`CoreResult`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clipforge_core::{MediaProcessor, ProcessorConfigBuilder, SourceDescriptor};
//! use std::path::Path;
//!
//! let config = ProcessorConfigBuilder::from_env()
//!     .artifact_dir("/srv/media")
//!     .build();
//! let processor = MediaProcessor::new(&config);
//!
//! let metadata = processor.probe().probe("https://example.com/watch?v=abc")?;
//! println!("{:?} ({} formats)", metadata.title, metadata.formats.len());
//!
//! let download = processor
//!     .downloader()
//!     .fetch(&SourceDescriptor::new("https://example.com/watch?v=abc"))?;
//!
//! let converted = processor
//!     .transcoder()
//!     .convert(&download.filepath, "mp4", Some("1280x720"))?;
//! println!("wrote {}", converted.output_path.display());
//! # Ok::<(), clipforge_core::CoreError>(())
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod processing;
pub mod progress;
pub mod record;
pub mod util;
pub mod utils;

// Re-exports for public API
pub use artifact::{ArtifactIdentity, ArtifactNamer, ArtifactStore};
pub use config::{ProcessorConfig, ProcessorConfigBuilder};
pub use error::{CoreError, CoreResult, EngineError, ErrorKind};
pub use external::{FetchEngine, FfmpegRunner, SidecarRunner, YtDlpEngine, check_dependency};
pub use processing::{
    DownloadOrchestrator, DownloadedArtifact, MediaMetadata, MediaProcessor, MetadataProbe,
    SourceDescriptor, TranscodeOrchestrator, TranscodedArtifact,
};
pub use progress::{GuardedSink, LogProgressSink, NullProgressSink, ProgressEvent, ProgressSink};
pub use record::{MetadataRecord, ResultRecord};
pub use utils::{format_bytes, format_duration};
