//! Error types for schema loading and model derivation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
///
/// Every variant is fatal: the generators render nothing until the whole
/// input set has been validated.
#[derive(Error, Debug)]
pub enum GenError {
    /// An input path does not exist
    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// An input CSV does not follow its header or row contract
    #[error("schema format error in {file}: {message}")]
    SchemaFormat { file: String, message: String },

    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration file or value
    #[error("configuration error: {0}")]
    Config(String),

    /// Interactive prompt failed or was abandoned
    #[error("prompt error: {0}")]
    Prompt(String),
}

impl GenError {
    /// Shorthand for a [`GenError::SchemaFormat`]
    pub fn schema_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::SchemaFormat {
            file: file.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for GenError {
    fn from(err: toml::de::Error) -> Self {
        GenError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
