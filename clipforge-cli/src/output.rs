//! Result printing.
//!
//! The JSON record goes to stdout as a single line so callers can parse it.
//! Human-oriented summaries go to stderr.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::io::{self, Write};

/// Writes `record` to stdout as one JSON line.
pub fn print_record<T: Serialize>(record: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, record)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Prints a labelled line to stderr, label highlighted.
pub fn print_info(label: &str, value: impl std::fmt::Display) {
    eprintln!("{} {}", style(format!("{label}:")).cyan().bold(), value);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}
