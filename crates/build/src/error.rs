use pointer_tokens_dictionary::DictionaryError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that abort a build
#[derive(Error, Debug)]
pub enum BuildError {
    /// Sources could not be loaded, or references could not be resolved
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Configuration file could not be read
    #[error("Failed to read configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is neither valid JSON nor valid TOML
    #[error("Invalid configuration {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Output directory or file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generated file could not be removed
    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
