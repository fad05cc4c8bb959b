//! Metadata discovery for remote sources.

use crate::error::{CoreError, CoreResult};
use crate::external::{FetchConfig, FetchEngine, FormatVariant};
use crate::progress::NullProgressSink;

use serde::Serialize;
use std::sync::Arc;

/// Descriptive attributes of a remote source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaMetadata {
    pub title: Option<String>,
    /// Seconds; absent for live streams and some extractors.
    pub duration: Option<f64>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    pub formats: Vec<FormatVariant>,
}

/// Read-only metadata lookup. Never writes to storage and never downloads
/// payload bytes.
#[derive(Clone)]
pub struct MetadataProbe {
    engine: Arc<dyn FetchEngine>,
}

impl MetadataProbe {
    pub fn new(engine: Arc<dyn FetchEngine>) -> Self {
        Self { engine }
    }

    /// Resolves `url` in discovery-only mode.
    ///
    /// Any engine failure becomes [`CoreError::SourceUnavailable`] carrying
    /// the engine's own text. No retry.
    pub fn probe(&self, url: &str) -> CoreResult<MediaMetadata> {
        log::debug!("Probing {url}");
        let info = self
            .engine
            .extract_info(url, &FetchConfig::discovery(), &NullProgressSink)
            .map_err(|e| {
                log::warn!("Probe of {url} failed: {e}");
                CoreError::SourceUnavailable(e.to_string())
            })?;

        Ok(MediaMetadata {
            title: info.title,
            duration: info.duration,
            thumbnail: info.thumbnail,
            uploader: info.uploader,
            formats: info.formats,
        })
    }
}
