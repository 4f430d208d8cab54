//! gssh CLI Library
//!
//! This crate provides the command-line interface for gssh, an interactive
//! wrapper around `gcloud compute ssh`. It handles argument parsing, the
//! interactive VM picker, and the run flow gluing configuration, listing,
//! filtering, selection memory and the final handoff together.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`selection`]: Candidate labels, cursor pre-positioning and the
//!   interactive chooser
//!
//! # Examples
//!
//! The `gssh` binary can be used in several ways:
//!
//! ```bash
//! # Pick from all VMs in the active project
//! gssh
//!
//! # Pick from VMs whose name starts with `web`
//! gssh web
//!
//! # Connect straight to a specific VM
//! gssh web-1
//!
//! # Filter with a regular expression
//! gssh -e '^web-[0-9]+$'
//!
//! # Reconnect to the VM chosen last time
//! gssh --previous
//!
//! # Run a one-off command instead of opening a shell
//! gssh web-1 -- uptime
//! ```

pub mod cli_args;
pub mod selection;
