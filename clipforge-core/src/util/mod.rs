//! Utility functions and helpers module
//!
//! Process execution shared by the fetch and transcode engines.

pub mod command;

// Re-export commonly used types and functions
pub use command::{ProcessOutcome, describe_command, run_command, run_command_streaming};
