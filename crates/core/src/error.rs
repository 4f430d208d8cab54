use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

fn matching(filter: &Option<String>) -> String {
    match filter {
        Some(filter) => format!(" matching `{filter}`"),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("gcloud {} error: {}, {}", .command, .status, .output)]
    GcloudExit {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("unmarshal instances error: {}, raw output: {}", .original, .raw)]
    InstanceParse {
        original: serde_json::Error,
        raw: String,
    },

    #[error("Invalid filter pattern `{}`: {}", .pattern, .original)]
    InvalidPattern {
        pattern: String,
        original: regex::Error,
    },

    #[error("no VMs found{}", matching(.filter))]
    NoVmsFound { filter: Option<String> },

    #[error("no VM named `{}`", _0)]
    HostNotFound(String),

    #[error("multiple VMs named `{}`", _0)]
    AmbiguousHost(String),

    #[error("cannot use previous selection: none recorded")]
    NoPreviousSelection,

    #[error("selector error: {}", _0)]
    Selector(String),

    #[error("IO error with {} file at `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn json_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }
}
