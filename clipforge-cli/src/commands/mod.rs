//! Command implementations for the CLI.
//!
//! Each command prints exactly one JSON record on stdout and returns whether
//! that record reported success.

/// `check`: verifies the external tools are runnable.
pub mod check;
/// `convert`: re-encodes a local file.
pub mod convert;
/// `download`: fetches a URL into the artifact directory.
pub mod download;
/// `extract-audio`: writes the audio track of a local file.
pub mod extract_audio;
/// `info`: metadata lookup without download.
pub mod info;

use clipforge_core::ArtifactStore;
use std::path::{Path, PathBuf};

/// Resolves a FILE argument: the path as given when it exists, otherwise the
/// same name inside the artifact directory. The second candidate is returned
/// even when missing so the core reports it as not found.
pub fn resolve_input(file: &Path, store: &ArtifactStore) -> PathBuf {
    if file.exists() {
        file.to_path_buf()
    } else {
        store.dir().join(file)
    }
}
