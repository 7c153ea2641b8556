use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for http-outcome operations
pub type Result<T> = std::result::Result<T, OutcomeError>;

/// Errors raised while configuring or constructing the client.
///
/// Classification itself never fails; these only surface from setup paths.
#[derive(Debug, Error)]
pub enum OutcomeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl OutcomeError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}
