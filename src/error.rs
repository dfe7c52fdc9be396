//! Error types shared by the engine and the front-end.

use std::path::PathBuf;

/// Rejected board or session parameters. Raised only at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size must be at least 2, got {0}")]
    TooSmall(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("invalid tile value {value} at ({row}, {col})")]
    InvalidValue { row: usize, col: usize, value: u32 },
    #[error("win threshold must be a power of two >= 4, got {0}")]
    InvalidThreshold(u32),
}

/// Failures while reading or writing the best score.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed best score {content:?} in {path}")]
    Malformed { path: PathBuf, content: String },
}
