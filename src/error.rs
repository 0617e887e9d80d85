//! Error types for the wordlist library.

use std::io;
use thiserror::Error;

/// Result type alias for wordlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or converting a word list.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON or does not have the expected shape.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// An element of `words` is not a string.
    #[error("Invalid word at index {index}: expected string, found {found}")]
    InvalidWord {
        /// Position of the offending element in `words`.
        index: usize,
        /// JSON type name of the element.
        found: &'static str,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // serde_json surfaces read failures as its own error kind
        if err.is_io() {
            return Error::Io(err.into());
        }
        Error::Json(err.to_string())
    }
}
