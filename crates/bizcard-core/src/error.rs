//! Error types for the bizcard-core library.
//!
//! Parsing itself is total and never produces these; they cover the
//! configuration and dictionary layers around the parser.

use thiserror::Error;

/// Main error type for the bizcard library.
#[derive(Error, Debug)]
pub enum BizcardError {
    /// Dictionary validation error.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to keyword dictionaries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DictionaryError {
    /// An entry is blank or contains no word characters.
    #[error("empty entry in {0} dictionary")]
    EmptyEntry(String),
}

/// Result type for the bizcard library.
pub type Result<T> = std::result::Result<T, BizcardError>;
