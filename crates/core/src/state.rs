//! Reading and writing the remembered VM selection.
//!
//! The state file holds one JSON object with the most recently chosen
//! instance, rewritten wholesale on every successful run. Reading
//! distinguishes "not recorded yet" from real I/O or parse failures so each
//! call site can decide how severe a failure is.

use std::fs;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::instance::Instance;

const STATE_FILE_DESCRIPTION: &str = "previous selection";

/// On-disk shape of the remembered selection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub previous: Instance,
}

fn get_reader(path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(STATE_FILE_DESCRIPTION, path, e))
}

/// Reads the previously selected instance from disk.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or holds invalid
/// JSON.
pub fn read_previous(path: &str) -> Result<Option<Instance>> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let reader = get_reader(path)?;

    let state: serde_json::Result<SelectionState> = serde_json::from_reader(reader);

    match state {
        Ok(state) => Ok(Some(state.previous)),
        Err(e) => Err(Error::json_error(
            "reading",
            STATE_FILE_DESCRIPTION,
            path,
            e,
        )),
    }
}

/// Overwrites the remembered selection with `instance`.
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written
/// to, or serialization fails.
pub fn write_previous(path: &str, instance: &Instance) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io_error(STATE_FILE_DESCRIPTION, path, e))?;
    }

    let f = File::create(path).map_err(|e| Error::io_error(STATE_FILE_DESCRIPTION, path, e))?;

    let state = SelectionState {
        previous: instance.clone(),
    };

    serde_json::to_writer(f, &state).map_err(|e| {
        Error::json_error("writing", STATE_FILE_DESCRIPTION, path, e)
    })
}
