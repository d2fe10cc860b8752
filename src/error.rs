//! Error types for the chain fee tracker

use thiserror::Error;

/// Transport-level failures from one HTTP fetch
///
/// Classified at the network boundary so downstream rendering can match
/// exhaustively instead of inspecting `reqwest::Error` internals.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Request exceeded the fixed timeout
    #[error("request timed out")]
    Timeout,

    /// Could not establish a connection
    #[error("connection failed")]
    ConnectionError,

    /// Server answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Any other transport-level failure
    #[error("network error")]
    Other,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionError
        } else {
            TransportError::Other
        }
    }
}

/// Classified failures from decoding a provider response
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Provider reported a rate limit in its payload
    #[error("rate limited by provider")]
    RateLimited,

    /// Provider rejected the configured API key
    #[error("invalid API key")]
    InvalidApiKey,

    /// Body was not the expected JSON shape
    #[error("malformed response")]
    Malformed,

    /// Provider-side error payload
    #[error("provider API error")]
    ApiError,

    /// Payload decoded but lacked the required confidence tiers
    #[error("missing fee data")]
    MissingData,
}

/// Any failure of one poll cycle
///
/// Every variant is recovered within the cycle that produced it and
/// surfaced only as a status line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The HTTP request itself failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be decoded into fee estimates
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failures loading or persisting the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config could not be serialized
    #[error("config serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures registering or removing the login item
#[derive(Debug, Error)]
pub enum AutostartError {
    /// Login items are only available on macOS
    #[error("login-item registration is only supported on macOS")]
    Unsupported,

    /// `osascript` ran but reported an error
    #[error("osascript failed: {0}")]
    Script(String),

    /// `osascript` could not be spawned
    #[error("autostart I/O error: {0}")]
    Io(#[from] std::io::Error),
}
