use std::path::PathBuf;

use thiserror::Error;

/// Tag that starts every log line and every error message.
pub const MESSAGE_PREFIX: &str = "suitesift: ";

#[derive(Debug, Error)]
pub enum SuitesiftError {
    #[error("suitesift: {message}")]
    Config { message: String },

    #[error("suitesift: failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("suitesift: io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("suitesift: command `{command}` failed: {message}")]
    Command { command: String, message: String },

    #[error("suitesift: error opening reader for {source_url}: {message}")]
    Fetch { source_url: String, message: String },

    #[error("suitesift: SHA not found in response from {source_url}")]
    RevisionNotFound { source_url: String },
}

impl SuitesiftError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing(setting: &str) -> Self {
        Self::config(format!("{setting} MUST be set"))
    }
}
