use std::process::{Command, ExitStatus, Stdio};

use crate::error::Result;

/// Runs a command with the current process's stdio attached.
///
/// The child shares the controlling terminal, so interactive sessions work
/// transparently and interrupts reach the child through the process group.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or waited on. A
/// non-zero child exit is not an error here; callers forward the status.
pub fn run_interactive(mut command: Command) -> Result<ExitStatus> {
    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?;

    Ok(status)
}
