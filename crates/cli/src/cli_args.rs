//! Command-line argument parsing and validation.
//!
//! Argument conflicts (exact host vs. filter, previous vs. both) are
//! enforced by `clap` at parse time, before any gcloud call is made.

use clap::Parser;

/// Command-line arguments for the `gssh` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use gssh_cli::cli_args::Args;
///
/// let args = Args::parse_from(["gssh", "web"]);
/// assert_eq!(args.filter, Some("web".to_string()));
/// ```
#[derive(Parser, Debug)]
#[command(name = "gssh", term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Only offer VMs whose name starts with this prefix.
    ///
    /// A VM whose name equals the prefix exactly is connected to directly,
    /// even when other VMs share the prefix.
    #[arg(num_args(1), conflicts_with = "host")]
    pub filter: Option<String>,

    /// Treat the filter as a regular expression matched anywhere in the name.
    #[arg(long, short = 'e', requires = "filter")]
    pub regex: bool,

    /// Connect to the VM with exactly this name, skipping the chooser.
    #[arg(long)]
    pub host: Option<String>,

    /// Reconnect to the previously selected VM without listing instances.
    #[arg(long, short = 'p', conflicts_with_all = ["filter", "host"])]
    pub previous: bool,

    /// Username for the ssh target, overriding the GSSH_USER environment variable.
    ///
    /// An explicitly empty value makes gcloud pick its own default user.
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// Path to the file that stores the previously selected VM.
    ///
    /// If not provided, defaults to `~/.gssh/previous.json`.
    #[arg(long)]
    pub state_path: Option<String>,

    /// Command to run on the VM instead of opening an interactive shell.
    ///
    /// Everything after `--` is passed to gcloud's `--command` flag.
    ///
    /// # Examples
    /// ```bash
    /// gssh web-1 -- systemctl status nginx
    /// ```
    #[arg(last = true)]
    pub remote_command: Vec<String>,
}
