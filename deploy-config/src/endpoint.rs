use crate::config::{self, DeploymentConfig};
use crate::error::Result;
use crate::scheme::Scheme;
use log::debug;
use url::Url;

/// Builds URLs against the configured server
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    config: &'a DeploymentConfig,
}

impl<'a> Endpoint<'a> {
    pub fn new(config: &'a DeploymentConfig) -> Self {
        Self { config }
    }

    pub fn scheme(&self) -> Scheme {
        self.config.scheme()
    }

    /// `http://server` or `https://server`, without a trailing slash
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.config.server())
    }

    /// Base URL joined with `path` by exactly one slash
    pub fn api_url(&self, path: &str) -> String {
        join(&self.base_url(), path)
    }

    /// Same as [`Endpoint::api_url`] on `ws://` / `wss://`
    pub fn websocket_url(&self, path: &str) -> String {
        let base = format!("{}://{}", self.scheme().websocket(), self.config.server());
        join(&base, path)
    }

    /// Validates the hostname and parses the base URL
    pub fn to_url(&self) -> Result<Url> {
        self.parse_api_url("")
    }

    /// Validates the hostname and parses the joined URL
    pub fn parse_api_url(&self, path: &str) -> Result<Url> {
        self.config.validate_hostname()?;
        let raw = self.api_url(path);
        debug!("Parsing endpoint URL {}", raw);
        Ok(Url::parse(&raw)?)
    }
}

fn join(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Base URL of the process-wide configuration
pub fn base_url() -> String {
    config::current().endpoint().base_url()
}

/// API URL against the process-wide configuration
pub fn api_url(path: &str) -> String {
    config::current().endpoint().api_url(path)
}
