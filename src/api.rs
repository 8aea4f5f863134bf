// API client module: a small blocking HTTP client for the SpaceTraders
// REST API. One request per call, no retries.

use crate::error::{Error, Result};
use crate::models::{Agent, Contract, Envelope, RegisterRequest, RegisterResponse, System, Waypoint};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Blocking client holding the base URL and, for authenticated calls,
/// the bearer token of the active account.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("traders/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Store a bearer token for subsequent authenticated requests.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.trim().to_string());
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    /// Send a request and unwrap the `data` envelope of a success response.
    fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let res = self.authed(req).send()?;
        let status = res.status();
        log::debug!("response status {}", status);
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(Error::Api { status, body });
        }
        let body = res.text()?;
        let env: Envelope<T> = serde_json::from_str(&body)?;
        Ok(env.data)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        self.send(self.client.get(&url))
    }

    /// Register a new agent. Does not require a token.
    pub fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse> {
        let url = self.url("register");
        log::debug!("POST {} symbol={} faction={}", url, req.symbol, req.faction);
        self.send(self.client.post(&url).json(req))
    }

    pub fn my_agent(&self) -> Result<Agent> {
        self.get("my/agent")
    }

    pub fn my_contracts(&self) -> Result<Vec<Contract>> {
        self.get("my/contracts")
    }

    pub fn system(&self, system: &str) -> Result<System> {
        self.get(&format!("systems/{}", system))
    }

    pub fn waypoint(&self, system: &str, waypoint: &str) -> Result<Waypoint> {
        self.get(&format!("systems/{}/waypoints/{}", system, waypoint))
    }
}
