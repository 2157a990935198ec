//! Error types for reqconv
//!
//! The conversion core never fails: malformed commands degrade to default
//! request fields. These errors only surface at the CLI boundary (reading
//! input, loading config, parsing arguments) and from the opt-in nested
//! field reconstruction, whose callers fall back to flat keys.

use thiserror::Error;

/// Main error type for reqconv
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Invalid field path '{path}': {message}")]
    FieldPath {
        path: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
