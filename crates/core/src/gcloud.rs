//! Invocations of the external `gcloud` CLI.
//!
//! Every call shells out exactly once, with no retries. Listing and config
//! calls capture output; the ssh handoff is built here but executed through
//! [`crate::execution`] with the terminal handed to the child.

use std::process::Command;

use log::debug;

use crate::error::{Error, Result};
use crate::instance::{parse_instances, Instance};

const GCLOUD: &str = "gcloud";

fn run_captured(description: &str, args: &[&str]) -> Result<String> {
    debug!("Running: {GCLOUD} {}", args.join(" "));

    let output = Command::new(GCLOUD).args(args).output()?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(Error::GcloudExit {
            command: description.to_string(),
            status: output.status,
            output: combined,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Lists all instances in the active project, sorted ascending by name.
///
/// # Errors
///
/// Returns an error if gcloud exits non-zero (with its raw output attached
/// for diagnosis) or its output is not a JSON instance array.
pub fn list_instances() -> Result<Vec<Instance>> {
    let raw = run_captured(
        "compute instances list",
        &["compute", "instances", "list", "--format=json"],
    )?;

    parse_instances(&raw)
}

/// Reads a configuration property such as `project`, trimmed of surrounding
/// whitespace.
///
/// # Errors
///
/// Returns an error if gcloud exits non-zero. Callers treat this as fatal;
/// there is no sensible fallback for an unresolvable property.
pub fn get_config_property(property: &str) -> Result<String> {
    let raw = run_captured(
        &format!("config get {property}"),
        &["config", "get", property],
    )?;
    Ok(raw.trim().to_string())
}

/// Builds the `gcloud compute ssh` command for the final handoff.
///
/// `target` is `user@name` or a bare instance name. A non-empty
/// `remote_command` is passed via `--command`, so gcloud runs it remotely
/// instead of opening an interactive shell.
#[must_use]
pub fn ssh_command(target: &str, zone: &str, remote_command: &[String]) -> Command {
    let mut command = Command::new(GCLOUD);
    command.args(["compute", "ssh", target]);
    command.arg(format!("--zone={zone}"));

    if !remote_command.is_empty() {
        command.arg(format!("--command={}", remote_command.join(" ")));
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args_of(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_ssh_command_interactive() {
        let command = ssh_command("web-1", "us-east1-b", &[]);

        assert_eq!(command.get_program(), "gcloud");
        assert_eq!(
            args_of(&command),
            vec!["compute", "ssh", "web-1", "--zone=us-east1-b"]
        );
    }

    #[test]
    fn test_ssh_command_with_user_target() {
        let command = ssh_command("alice@web-1", "us-east1-b", &[]);

        assert_eq!(
            args_of(&command),
            vec!["compute", "ssh", "alice@web-1", "--zone=us-east1-b"]
        );
    }

    #[test]
    fn test_ssh_command_with_remote_command() {
        let remote = vec!["uptime".to_string(), "-p".to_string()];
        let command = ssh_command("web-1", "us-east1-b", &remote);

        assert_eq!(
            args_of(&command),
            vec![
                "compute",
                "ssh",
                "web-1",
                "--zone=us-east1-b",
                "--command=uptime -p"
            ]
        );
    }
}
