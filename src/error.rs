use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("External tool error: {tool} - {message}")]
    ExternalToolError {
        tool: String,
        message: String,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<anyhow::Error> for ReconError {
    fn from(error: anyhow::Error) -> Self {
        ReconError::UnexpectedError(error.to_string())
    }
}

impl From<std::io::Error> for ReconError {
    fn from(error: std::io::Error) -> Self {
        ReconError::UnexpectedError(error.to_string())
    }
}

pub type ReconResult<T> = std::result::Result<T, ReconError>;
