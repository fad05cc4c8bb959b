//! Artifact identity and store management.
//!
//! Every file the core produces is named `<identity>.<ext>` inside a single
//! flat directory. Identities are random UUIDs, so concurrent calls and
//! separate process runs never need to coordinate to avoid collisions.

use crate::error::CoreResult;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Placeholder the fetch engine replaces with the extension it chose.
pub const EXT_PLACEHOLDER: &str = "%(ext)s";

/// Opaque, single-use filename stem for one produced artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactIdentity(Uuid);

impl ArtifactIdentity {
    /// Renders `<identity>.<ext>`.
    #[must_use]
    pub fn file_name(&self, ext: &str) -> String {
        format!("{self}.{ext}")
    }

    /// Output template for the fetch engine, e.g. `downloads/<identity>.%(ext)s`.
    #[must_use]
    pub fn output_template(&self, dir: &Path) -> String {
        dir.join(self.file_name(EXT_PLACEHOLDER))
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for ArtifactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Mints artifact identities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactNamer;

impl ArtifactNamer {
    #[must_use]
    pub fn new_identity() -> ArtifactIdentity {
        ArtifactIdentity(Uuid::new_v4())
    }
}

/// The flat directory that holds every produced artifact.
///
/// The directory is held as an absolute path, so every path the store hands
/// out is absolute even when it was configured relative to the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        // Only fails for an empty path or an unreadable working directory.
        let dir = std::path::absolute(&dir).unwrap_or(dir);
        Self { dir }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the artifact named by `identity` with extension `ext`.
    #[must_use]
    pub fn path_for(&self, identity: &ArtifactIdentity, ext: &str) -> PathBuf {
        self.dir.join(identity.file_name(ext))
    }

    /// Creates the store directory. Meant to be called once at startup.
    pub fn ensure_exists(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        log::debug!("Artifact store ready at {}", self.dir.display());
        Ok(())
    }
}

/// Returns the final path component as a `String`.
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Swaps the extension of `path` for `ext`, the way the fetch engine renames a
/// file after audio extraction.
pub(crate) fn with_extension(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext)
}
