// file: src/config/mod.rs
// version: 1.0.0
// guid: 45f612af-540a-4b2a-ae22-9c3500a423b2

//! Configuration module for the router restart agent
//!
//! Built once from the command line and passed by reference to the prober,
//! the authenticator and the restart invoker. Nothing is read from files or
//! the environment.

use crate::cli::args::Cli;
use crate::error::{AgentError, Result};
use crate::router::{encoding, LOGIN_PATH, RESTART_PATH};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Router admin access code
///
/// Only ever leaves the process as a digest; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validate and wrap an access code
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AgentError::validation("Password must not be empty"));
        }
        if !encoding::is_representable(&secret) {
            return Err(AgentError::validation(
                "Password contains characters the router's Windows-1252 form decoder cannot represent",
            ));
        }
        Ok(Self(secret))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// One `*` per character, as the router's login page fills the password box
    pub fn masked(&self) -> String {
        "*".repeat(self.0.chars().count())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// Connectivity probe settings
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub host: String,
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: "8.8.8.8".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub base_url: Url,
    pub credential: Credential,
    pub probe: ProbeConfig,
    pub request_timeout: Duration,
}

impl AgentConfig {
    pub fn new(base_url: &str, credential: Credential) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            credential,
            probe: ProbeConfig::default(),
            request_timeout: Duration::from_secs(30),
        })
    }

    /// Build and validate the configuration from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.probe_timeout == 0 {
            return Err(AgentError::validation("--probe-timeout must be greater than zero"));
        }
        if cli.request_timeout == 0 {
            return Err(AgentError::validation("--request-timeout must be greater than zero"));
        }
        if cli.probe_host.trim().is_empty() {
            return Err(AgentError::validation("--probe-host must not be empty"));
        }

        let mut config = Self::new(&cli.url, Credential::new(cli.password.clone())?)?;
        config.probe = ProbeConfig {
            host: cli.probe_host.trim().to_string(),
            timeout: Duration::from_secs(cli.probe_timeout),
        };
        config.request_timeout = Duration::from_secs(cli.request_timeout);
        Ok(config)
    }

    pub fn root_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn login_url(&self) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(LOGIN_PATH)
    }

    pub fn restart_url(&self) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(RESTART_PATH)
    }
}

/// Parse the router address, accepting a bare host or IP as `http://<host>/`
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AgentError::validation("Router URL must not be empty"));
    }

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let mut url = Url::parse(&candidate)
        .map_err(|e| AgentError::validation(format!("Invalid router URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AgentError::validation(format!(
                "Unsupported router URL scheme '{}'",
                other
            )))
        }
    }
    if url.host_str().is_none() {
        return Err(AgentError::validation(format!("Router URL '{}' has no host", raw)));
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
