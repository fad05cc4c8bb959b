//! Configuration utility functions
//!
//! Helpers for reading path values from an environment-like source.

use std::path::PathBuf;

/// Get a path value from the lookup or use the default. Empty values count as unset.
pub fn lookup_path<F>(lookup: &F, key: &str, default: PathBuf) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup_optional_path(lookup, key).unwrap_or(default)
}

/// Get an optional path value from the lookup.
pub fn lookup_optional_path<F>(lookup: &F, key: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
