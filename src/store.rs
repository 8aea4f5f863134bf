// Local state on disk: a small JSON config naming the active account and
// one plaintext token file per registered account.
//
// Layout under the data directory:
//   config.json       {"active_symbol": "..."}
//   <symbol>.token    raw bearer token

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const TOKEN_EXT: &str = "token";

/// Persisted selection of the account used for API calls.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub active_symbol: String,
}

/// Handle to the data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    fn token_path(&self, symbol: &str) -> Result<PathBuf> {
        validate_symbol(symbol)?;
        Ok(self.dir.join(format!("{}.{}", symbol, TOKEN_EXT)))
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            log::info!("creating data directory {}", self.dir.display());
            fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        }
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        let data = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn write_config(&self, config: &Config) -> Result<()> {
        let path = self.config_path();
        let data = serde_json::to_string(config)?;
        fs::write(&path, data).map_err(|e| Error::io(&path, e))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    /// The active account symbol, or `NoActiveAccount` when the config is
    /// missing or names nobody.
    pub fn active_symbol(&self) -> Result<String> {
        let config = match self.load_config() {
            Ok(c) => c,
            Err(Error::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NoActiveAccount)
            }
            Err(e) => return Err(e),
        };
        if config.active_symbol.is_empty() {
            return Err(Error::NoActiveAccount);
        }
        Ok(config.active_symbol)
    }

    /// Make `symbol` the active account.
    pub fn set_active(&self, symbol: &str) -> Result<()> {
        validate_symbol(symbol)?;
        self.write_config(&Config {
            active_symbol: symbol.to_string(),
        })
    }

    pub fn read_token(&self, symbol: &str) -> Result<String> {
        let path = self.token_path(symbol)?;
        fs::read_to_string(&path).map_err(|e| Error::io(&path, e))
    }

    pub fn write_token(&self, symbol: &str, token: &str) -> Result<()> {
        let path = self.token_path(symbol)?;
        fs::write(&path, token).map_err(|e| Error::io(&path, e))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    /// Whether a token with non-whitespace content is stored for `symbol`.
    pub fn has_token(&self, symbol: &str) -> bool {
        self.read_token(symbol)
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    /// Token of the active account, surrounding whitespace removed.
    pub fn active_token(&self) -> Result<String> {
        let symbol = self.active_symbol()?;
        Ok(self.read_token(&symbol)?.trim().to_string())
    }

    /// True iff the active symbol has a token file with non-whitespace content.
    pub fn is_initialized(&self) -> bool {
        self.active_token().map(|t| !t.is_empty()).unwrap_or(false)
    }

    /// Symbols of all stored accounts, sorted.
    pub fn accounts(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.dir, e)),
        };
        let mut symbols = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(&self.dir, e))?.path();
            if path.extension().and_then(|s| s.to_str()) != Some(TOKEN_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                symbols.push(stem.to_string());
            }
        }
        symbols.sort();
        Ok(symbols)
    }
}

/// Account symbols become file names, so anything that could escape the
/// data directory is rejected.
pub fn validate_symbol(symbol: &str) -> Result<()> {
    let bad = symbol.is_empty()
        || symbol.contains("..")
        || symbol.contains('/')
        || symbol.contains('\\')
        || symbol.contains(std::path::MAIN_SEPARATOR);
    if bad {
        return Err(Error::InvalidSymbol(symbol.to_string()));
    }
    Ok(())
}
