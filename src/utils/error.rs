//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while validating rows, ordering dimensions or building the trie.
///
/// Row indices are zero-based positions in the input batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PivotError {
    #[error("input rows cannot be empty")]
    EmptyInput,

    #[error("row {row} does not match the dimension schema of row 0: {reason}")]
    SchemaMismatch { row: usize, reason: String },

    #[error("row {row} has no measure field '#'")]
    MissingMeasure { row: usize },

    #[error("row {row} has invalid measure '{value}': expected a finite number")]
    InvalidMeasure { row: usize, value: String },

    #[error("row {row} has an invalid label: {reason}")]
    InvalidLabel { row: usize, reason: String },

    #[error("invalid hierarchy: {0}")]
    Configuration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors that can occur while parsing a row source
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid row format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a pivot configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
