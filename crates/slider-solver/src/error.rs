//! Error types for the slider solver

use thiserror::Error;

/// Errors raised while building boards or writing results.
///
/// An exhausted search is not an error: drivers return `None` for that.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {n}: must be between 2 and {max}")]
    InvalidSize { n: usize, max: usize },

    #[error("invalid tile count: expected {expected} tiles for a {n}x{n} board, got {got}")]
    InvalidLength { n: usize, expected: usize, got: usize },

    #[error("config contains invalid/duplicate entries: {tiles:?}")]
    InvalidEntries { tiles: Vec<u16> },

    #[error("invalid tile '{token}' at position {position}")]
    InvalidTile {
        token: String,
        position: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
