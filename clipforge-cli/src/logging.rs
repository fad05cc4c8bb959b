// ============================================================================
// clipforge-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger by Default, log4rs When Logging to a File
//
// All log output goes to stderr; stdout carries only the JSON result record.
//
// USAGE:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug or -v: Detailed debugging information
// - --log-dir DIR: console plus a timestamped file in DIR
//
// AI-ASSISTANT-INFO: Logging initialisation for the CLI

use anyhow::Result;
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialises the global logger. Returns the log file path when file
/// logging was requested.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let level = default_level(verbose);

    if let Some(dir) = log_dir {
        let log_file = clipforge_core::file_logging::setup_file_logging(dir, level)?;
        return Ok(Some(log_file));
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str().to_ascii_lowercase()),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();
    Ok(None)
}
