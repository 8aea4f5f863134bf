// Runtime settings: where local state lives and which API to talk to.
// Values come from CLI flags, which clap backs with environment variables.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.spacetraders.io/v2";
pub const DATA_DIR_NAME: &str = ".spacetraders";

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    data_dir: PathBuf,
    api_url: String,
}

impl Settings {
    /// Build settings from optional overrides. Without an explicit data
    /// directory, falls back to `~/.spacetraders`.
    pub fn new(data_dir: Option<PathBuf>, api_url: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::home_dir().ok_or(Error::NoHomeDir)?.join(DATA_DIR_NAME),
        };
        let api_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();
        Ok(Settings { data_dir, api_url })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
