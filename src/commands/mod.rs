// Command handlers. Each handler takes a `Context` built once by the
// binary and performs at most a couple of API round-trips.

pub mod accounts;
pub mod activate;
pub mod get;
pub mod init;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::error::Result;
use crate::store::Store;

pub const NOT_INITIALIZED: &str =
    "You do not have an account. Create one with `traders init` first.";

/// Shared state for one invocation.
pub struct Context {
    pub store: Store,
    pub api_url: String,
    /// Print raw JSON instead of the labelled view.
    pub json: bool,
}

impl Context {
    pub fn new(settings: &Settings, json: bool) -> Self {
        Context {
            store: Store::new(settings.data_dir()),
            api_url: settings.api_url().to_string(),
            json,
        }
    }

    /// Client without credentials, for registration.
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.api_url)
    }

    /// Client carrying the active account's token, or `None` after telling
    /// the user to run `init` when no account is set up.
    pub fn authed_client(&self) -> Result<Option<ApiClient>> {
        if !self.store.is_initialized() {
            println!("{}", NOT_INITIALIZED);
            return Ok(None);
        }
        let mut api = self.client()?;
        api.set_token(&self.store.active_token()?);
        Ok(Some(api))
    }
}
