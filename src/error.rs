use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenvSecurityError {
    #[error("Path error: cannot resolve {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store keys are JSON strings, so the path must be valid UTF-8
    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The directory holding the store file could not be created
    #[error("Failed to create config directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file could not be written; the decision was NOT recorded
    #[error("Failed to write trust store to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VenvSecurityError>;
