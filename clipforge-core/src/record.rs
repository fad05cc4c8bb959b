//! Caller-facing result records.
//!
//! Operation results are rendered as flat JSON objects: `success` is always
//! present, a failed record carries only `error`, and a successful record
//! carries only the payload fields of its operation.

use crate::error::{CoreError, CoreResult};
use crate::processing::{DownloadedArtifact, MediaMetadata, TranscodedArtifact};

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a download, conversion or audio extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultRecord {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultRecord {
    #[must_use]
    pub fn failure(error: &CoreError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_download(result: &CoreResult<DownloadedArtifact>) -> Self {
        match result {
            Ok(artifact) => Self {
                success: true,
                filename: Some(artifact.filename.clone()),
                filepath: Some(artifact.filepath.clone()),
                title: artifact.title.clone(),
                duration: artifact.duration,
                ..Self::default()
            },
            Err(e) => Self::failure(e),
        }
    }

    #[must_use]
    pub fn from_transcode(result: &CoreResult<TranscodedArtifact>) -> Self {
        match result {
            Ok(artifact) => Self {
                success: true,
                output_file: Some(artifact.output_file.clone()),
                output_path: Some(artifact.output_path.clone()),
                ..Self::default()
            },
            Err(e) => Self::failure(e),
        }
    }
}

/// Outcome of a metadata probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MediaMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&CoreResult<MediaMetadata>> for MetadataRecord {
    fn from(result: &CoreResult<MediaMetadata>) -> Self {
        match result {
            Ok(metadata) => Self {
                success: true,
                data: Some(metadata.clone()),
                error: None,
            },
            Err(e) => Self {
                success: false,
                data: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_carries_only_error() {
        let result: CoreResult<TranscodedArtifact> =
            Err(CoreError::NotFound(PathBuf::from("missing.mp4")));
        let value = serde_json::to_value(ResultRecord::from_transcode(&result)).unwrap();
        assert_eq!(value, json!({"success": false, "error": "File not found"}));
    }

    #[test]
    fn download_success_fields() {
        let result = Ok(DownloadedArtifact {
            filename: "abc.mp4".into(),
            filepath: PathBuf::from("downloads/abc.mp4"),
            title: Some("Clip".into()),
            duration: None,
        });
        let value = serde_json::to_value(ResultRecord::from_download(&result)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "filename": "abc.mp4",
                "filepath": "downloads/abc.mp4",
                "title": "Clip"
            })
        );
    }

    #[test]
    fn metadata_failure_has_no_data() {
        let result: CoreResult<MediaMetadata> =
            Err(CoreError::SourceUnavailable("ERROR: Video unavailable".into()));
        let value = serde_json::to_value(MetadataRecord::from(&result)).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "ERROR: Video unavailable"})
        );
    }
}
