//! gssh Core Library
//!
//! This crate provides the core functionality for gssh, an interactive
//! wrapper around `gcloud compute ssh` that lists the VMs in the active
//! project, narrows them by name, remembers the last choice, and hands the
//! terminal to gcloud for the actual session.
//!
//! # Key Features
//!
//! - **Instance Model**: Parse and sort the JSON listing gcloud produces
//! - **Filtering**: Prefix, regex and exact-host narrowing, with an
//!   exact-match-wins rule for prefixes
//! - **Selection Memory**: A single remembered VM, reread on the next run
//! - **Subprocess Plumbing**: Captured listing/config calls and the
//!   terminal-inheriting ssh handoff
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! Narrowing a listing to candidates starting with `web`:
//!
//! ```
//! use gssh_core::filter::Filter;
//! use gssh_core::instance::Instance;
//!
//! let instances = vec![
//!     Instance { name: "db-1".to_string(), zone: "zones/us-central1-a".to_string() },
//!     Instance { name: "web-1".to_string(), zone: "zones/us-east1-b".to_string() },
//! ];
//!
//! let filter = Filter::new(None, Some("web"), false)?;
//! let candidates = filter.apply(instances)?;
//! assert_eq!(candidates[0].name, "web-1");
//! # Ok::<(), gssh_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod filter;
pub mod gcloud;
pub mod instance;
pub mod state;
