//! Error types for the td-tictactoe crate

use thiserror::Error;

/// Main error type for the td-tictactoe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinates ({row}, {column}) are out of bounds (must be 0-2)")]
    InvalidCoordinates { row: usize, column: usize },

    #[error("no legal moves available for {mark}")]
    NoLegalMoves { mark: crate::tictactoe::Mark },

    #[error("position '{key}' is missing from the value table")]
    MissingValue { key: String },

    #[error("board key must have {expected} cells, got {got} in '{key}'")]
    InvalidKeyLength {
        expected: usize,
        got: usize,
        key: String,
    },

    #[error("invalid character '{character}' at position {position} in board key '{key}'")]
    InvalidKeyCharacter {
        character: char,
        position: usize,
        key: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
