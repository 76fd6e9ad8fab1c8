//! Client configuration from the environment (and an optional `.env` file).

use stackexchange_api::Client;

const ENV_KEY: &str = "STACKEXCHANGE_KEY";
const ENV_ACCESS_TOKEN: &str = "STACKEXCHANGE_ACCESS_TOKEN";
const ENV_API_ROOT: &str = "STACKEXCHANGE_API_ROOT";

#[derive(Debug, Default, PartialEq)]
pub struct Config {
    pub key: Option<String>,
    pub access_token: Option<String>,
    pub api_root: Option<String>,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env: {}", e);
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            key: non_empty(ENV_KEY),
            access_token: non_empty(ENV_ACCESS_TOKEN),
            api_root: non_empty(ENV_API_ROOT),
        }
    }

    pub fn with_key(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key {
            self.key = Some(key.to_string());
        }
        self
    }

    pub fn with_access_token(mut self, access_token: Option<&str>) -> Self {
        if let Some(access_token) = access_token {
            self.access_token = Some(access_token.to_string());
        }
        self
    }

    pub fn client(&self, verbose: bool) -> Client {
        let mut client = Client::new().with_verbose(verbose);
        if let Some(root) = &self.api_root {
            client = client.with_base_url(root);
        }
        if let Some(key) = &self.key {
            client = client.with_key(key);
        }
        if let Some(access_token) = &self.access_token {
            client = client.with_access_token(access_token);
        }
        client
    }
}
