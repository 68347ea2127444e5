//! Error types for Storefront

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No session token in storage")]
    TokenMissing,

    #[error("Malformed session token: {0}")]
    TokenMalformed(String),

    #[error("Session token expired")]
    TokenExpired,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config file not found. Run 'storefront init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for the failure kinds that collapse to "no session":
    /// a missing, malformed or expired token.
    pub fn is_no_session(&self) -> bool {
        matches!(
            self,
            Error::TokenMissing | Error::TokenMalformed(_) | Error::TokenExpired
        )
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
