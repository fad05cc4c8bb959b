use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::{Path, PathBuf};

/// Log file name for a run started at `now`.
pub fn log_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("clipforge_{}.log", now.format("%Y%m%d_%H%M%S"))
}

/// Routes the `log` facade to stderr and to a timestamped file in `log_dir`.
///
/// Returns the path of the log file. Can only succeed once per process.
pub fn setup_file_logging(log_dir: &Path, log_level: LevelFilter) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = log_dir.join(log_file_name(chrono::Local::now()));

    // stdout is reserved for result records
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("File logging to {}", log_file.display());
    Ok(log_file)
}
