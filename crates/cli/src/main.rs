use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use gssh_core::config::{self, USER_ENV_VAR};
use gssh_core::error::{Error, Result};
use gssh_core::filter::Filter;
use gssh_core::instance::Instance;
use gssh_core::{execution, gcloud, state};

use crate::cli_args::Args;

mod cli_args;
mod selection;

/// Produce the candidate instances plus the remembered VM that seeds the
/// picker cursor.
///
/// In `--previous` mode the remembered instance is the sole candidate and
/// an unreadable state file is fatal. Otherwise the listing is filtered and
/// the remembered VM is loaded best-effort.
fn acquire_candidates(
    args: &Args,
    filter: &Filter,
    state_path: &str,
) -> Result<(Vec<Instance>, Option<Instance>)> {
    if args.previous {
        let previous = state::read_previous(state_path)?.ok_or(Error::NoPreviousSelection)?;
        return Ok((vec![previous.clone()], Some(previous)));
    }

    let previous = state::read_previous(state_path).unwrap_or_else(|e| {
        debug!("Ignoring unreadable previous selection: {e}");
        None
    });

    let candidates = filter.apply(gcloud::list_instances()?)?;

    Ok((candidates, previous))
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    // Compile the filter before anything shells out, so bad input fails
    // without paying for a listing.
    let filter = Filter::new(args.host.as_deref(), args.filter.as_deref(), args.regex)?;

    let state_path = config::get_state_path(&args.state_path);
    debug!("State path: `{state_path}`");

    let user = config::resolve_user(args.user.clone(), env::var(USER_ENV_VAR).ok());
    let project = gcloud::get_config_property("project")?;

    println!("Using config: project={project:?}, user={user:?}");

    let (candidates, previous) = acquire_candidates(&args, &filter, &state_path)?;

    let selected = selection::choose_instance(&candidates, previous.as_ref())?;

    println!("Selected VM: {}", selected.name);

    if let Err(e) = state::write_previous(&state_path, selected) {
        debug!("Could not save selection: {e}");
    }

    let target = if user.is_empty() {
        selected.name.clone()
    } else {
        format!("{}@{}", user, selected.name)
    };

    let zone = selected.short_zone();

    println!("Executing: gcloud compute ssh {target} --zone={zone}\n");

    let status =
        execution::run_interactive(gcloud::ssh_command(&target, zone, &args.remote_command))?;

    if status.success() {
        return Ok(ExitCode::SUCCESS);
    }

    // Forward the child's exit code; a signal death has no code.
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from))
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
