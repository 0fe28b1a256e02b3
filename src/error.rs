// file: src/error.rs
// version: 1.0.0
// guid: b6630034-9d5f-4c87-b7d8-0496aef4b2a8

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AgentError>;

/// HTTP-layer failures talking to the router
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Failures of the challenge-response login
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("No 'nonce' field on the login page at {url}")]
    MissingNonce { url: String, snippet: String },

    #[error("Login rejected by the router (landed on {url})")]
    LoginRejected { url: String, snippet: String },

    #[error("Form encoding error: {0}")]
    Encoding(String),
}

/// Failures submitting the restart form
#[derive(Error, Debug)]
pub enum RestartError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("No restart form found on {url}")]
    FormNotFound { url: String, snippet: String },

    #[error("No 'nonce' field on the restart form at {url}")]
    MissingNonce { url: String, snippet: String },

    #[error("Restart not confirmed by the router (landed on {url}); verify manually")]
    Unconfirmed { url: String, snippet: String },

    #[error("Form encoding error: {0}")]
    Encoding(String),
}

/// Error types for the router restart agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Connectivity probe unavailable: {0}")]
    ProbeUnavailable(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Login failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Restart failed: {0}")]
    Restart(#[from] RestartError),
}

impl AgentError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new probe unavailable error
    pub fn probe_unavailable(msg: impl Into<String>) -> Self {
        Self::ProbeUnavailable(msg.into())
    }

    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::ProbeUnavailable(_) => 2,
            Self::Transport(_)
            | Self::Auth(AuthError::Transport(_))
            | Self::Restart(RestartError::Transport(_)) => 3,
            Self::Auth(AuthError::MissingNonce { .. } | AuthError::Encoding(_))
            | Self::Restart(
                RestartError::FormNotFound { .. }
                | RestartError::MissingNonce { .. }
                | RestartError::Encoding(_),
            ) => 4,
            Self::Auth(AuthError::LoginRejected { .. }) => 5,
            Self::Restart(RestartError::Unconfirmed { .. }) => 6,
        }
    }

    /// Whether the outcome is ambiguous rather than a hard failure
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Restart(RestartError::Unconfirmed { .. }))
    }

    /// Page snippet captured for diagnosis, if any
    pub fn snippet(&self) -> Option<&str> {
        match self {
            Self::Auth(AuthError::MissingNonce { snippet, .. })
            | Self::Auth(AuthError::LoginRejected { snippet, .. })
            | Self::Restart(RestartError::FormNotFound { snippet, .. })
            | Self::Restart(RestartError::MissingNonce { snippet, .. })
            | Self::Restart(RestartError::Unconfirmed { snippet, .. }) => Some(snippet.as_str()),
            _ => None,
        }
    }
}
