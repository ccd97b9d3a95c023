use crate::endpoint::Endpoint;
use crate::error::{ConfigError, Result};
use crate::scheme::Scheme;
use crate::settings;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Host;
use validator::{Validate, ValidationError};

/// Hostname the untouched template ships with
pub const TEMPLATE_SERVER: &str = "localhost";
/// HTTPS flag the untouched template ships with
pub const TEMPLATE_USE_HTTPS: bool = false;

lazy_static! {
    // host name, IPv4 or bracketed IPv6, with an optional port
    static ref HOSTNAME_REGEX: Regex = Regex::new(
        r"^(\[[0-9A-Fa-f:.]+\]|[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*)(:[0-9]{1,5})?$"
    )
    .unwrap();

    /// Process-wide configuration built from [`settings`]
    pub static ref CONFIG: DeploymentConfig =
        DeploymentConfig::new(settings::SERVER_NAME, settings::USE_HTTPS);
}

/// Longest host name allowed, not counting a `:port` suffix
pub const MAX_HOSTNAME_LEN: usize = 253;

/// Splits `host[:port]`, keeping IPv6 brackets on the host
fn split_host_port(val: &str) -> (&str, Option<&str>) {
    if val.starts_with('[') {
        match val.find(']') {
            Some(end) => (&val[..=end], val[end + 1..].strip_prefix(':')),
            None => (val, None),
        }
    } else {
        match val.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (val, None),
        }
    }
}

/// Accepts `host[:port]` only when `url` would accept it as an authority
pub fn validate_hostname_format(val: &str) -> std::result::Result<(), ValidationError> {
    if !HOSTNAME_REGEX.is_match(val) {
        return Err(ValidationError::new("invalid_hostname"));
    }
    let (host, port) = split_host_port(val);
    if host.len() > MAX_HOSTNAME_LEN {
        return Err(ValidationError::new("hostname_too_long"));
    }
    if let Some(port) = port {
        if port.parse::<u16>().is_err() {
            return Err(ValidationError::new("invalid_port"));
        }
    }
    if Host::parse(host).is_err() {
        return Err(ValidationError::new("invalid_host"));
    }
    Ok(())
}

/// The configuration for the current process. Always the same instance.
pub fn current() -> &'static DeploymentConfig {
    &CONFIG
}

/// Server the frontend talks to and how to reach it
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Bare domain or IP, no protocol and no trailing slash
    #[validate(length(min = 1, message = "Server hostname is required"))]
    #[validate(custom = "validate_hostname_format")]
    #[serde(alias = "server_name")]
    pub server: String,

    /// Build URLs with the secure scheme when set
    #[serde(rename = "useHTTPS", alias = "use_https")]
    pub use_https: bool,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self::template()
    }
}

impl DeploymentConfig {
    pub fn new(server: impl Into<String>, use_https: bool) -> Self {
        Self {
            server: server.into(),
            use_https,
        }
    }

    /// Values of the unedited template
    pub fn template() -> Self {
        Self::new(TEMPLATE_SERVER, TEMPLATE_USE_HTTPS)
    }

    /// Reads a configuration served as JSON, e.g. `{"server": "...", "useHTTPS": true}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    pub fn scheme(&self) -> Scheme {
        Scheme::from_https_flag(self.use_https)
    }

    /// True while the template values were never edited
    pub fn is_template(&self) -> bool {
        self.server == TEMPLATE_SERVER && self.use_https == TEMPLATE_USE_HTTPS
    }

    pub fn endpoint(&self) -> Endpoint<'_> {
        Endpoint::new(self)
    }

    /// Checks that `server` is a bare host (with optional port) usable in a URL.
    ///
    /// The settings themselves are never checked; callers that build URLs
    /// opt in by calling this.
    pub fn validate_hostname(&self) -> Result<()> {
        let server = self.server.as_str();
        if server.trim().is_empty() {
            return Err(ConfigError::EmptyHostname);
        }
        if server.contains("://") {
            return Err(ConfigError::ProtocolPrefix(server.to_string()));
        }
        if server.ends_with('/') {
            return Err(ConfigError::TrailingSlash(server.to_string()));
        }
        self.validate()?;
        Ok(())
    }

    /// Warning logged by [`DeploymentConfig::log_summary`] while the template is unedited
    pub fn template_warning(&self) -> Option<String> {
        if !self.is_template() {
            return None;
        }
        Some(format!(
            "Deployment settings still hold the template values ({}, HTTPS off); edit settings.rs before deploying",
            TEMPLATE_SERVER
        ))
    }

    pub fn log_summary(&self) {
        info!("Frontend targeting {}://{}", self.scheme(), self.server);
        if let Some(message) = self.template_warning() {
            warn!("{}", message);
        }
    }
}
