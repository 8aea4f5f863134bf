// Error type shared by the library modules. The binary wraps these in
// `anyhow` at the top level; library code returns `traders::Result`.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between the filesystem, the API and the
/// user's input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine the home directory; pass --home or set SPACETRADERS_HOME")]
    NoHomeDir,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API request failed: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("An account for '{0}' already exists. Delete its token before creating a new one.")]
    AccountExists(String),

    #[error("No stored account named '{0}'. Run `traders init --symbol {0}` first.")]
    UnknownAccount(String),

    #[error("Invalid account symbol '{0}': must be non-empty and free of path separators")]
    InvalidSymbol(String),

    #[error("No active account. Run `traders init` or `traders activate` first.")]
    NoActiveAccount,

    #[error("Malformed waypoint symbol '{0}': expected SYSTEM-WAYPOINT")]
    InvalidWaypoint(String),

    #[error("{0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
