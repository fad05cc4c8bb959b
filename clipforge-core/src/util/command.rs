//! Child-process execution with captured output.
//!
//! Both external engines are driven through these helpers: arguments are
//! passed as an explicit vector (no shell), stderr is always captured so a
//! failing tool's diagnostics can be surfaced verbatim.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, error};

use crate::error::{CoreResult, command_start_error, command_wait_error, exited_text};

/// Exit code plus captured output of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Captured stderr, or a status line naming `tool` when stderr is blank.
    #[must_use]
    pub fn diagnostic(&self, tool: &str) -> String {
        exited_text(tool, &self.code, &self.stderr)
    }
}

/// Renders a command as a single line for debug logs.
pub fn describe_command(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Runs `cmd` to completion and captures stdout/stderr.
pub fn run_command(cmd: &mut Command, name: &str) -> CoreResult<ProcessOutcome> {
    debug!("Running {name}: {}", describe_command(cmd));

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| command_start_error(name, e))?;

    let outcome = ProcessOutcome {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if !outcome.success() {
        error!("{name} exited with status {:?}", outcome.code);
    }
    Ok(outcome)
}

/// Runs `cmd`, handing each stderr line to `on_line` as it arrives.
///
/// Engines that print their result document on stdout report progress on
/// stderr, so stderr is the live stream here. stdout is drained on a helper
/// thread so a large result document cannot stall the child. `on_line` runs
/// on the calling thread; every stderr line is also kept in the outcome.
pub fn run_command_streaming<F>(cmd: &mut Command, name: &str, mut on_line: F) -> CoreResult<ProcessOutcome>
where
    F: FnMut(&str),
{
    debug!("Running {name}: {}", describe_command(cmd));

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| command_start_error(name, e))?;

    let stdout_handle = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    });

    let mut stderr_lines = Vec::new();
    if let Some(stderr) = child.stderr.take() {
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            on_line(&line);
            stderr_lines.push(line);
        }
    }

    let status = child.wait().map_err(|e| command_wait_error(name, e))?;
    let stdout = stdout_handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    let outcome = ProcessOutcome {
        code: status.code(),
        stdout,
        stderr: stderr_lines.join("\n"),
    };

    if !outcome.success() {
        error!("{name} exited with status {:?}", outcome.code);
    }
    Ok(outcome)
}
