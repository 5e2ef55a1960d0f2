use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A primitive was constructed with parameters it cannot run with
    /// (zero interval, zero steps, negative target, threshold out of range).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings store error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
