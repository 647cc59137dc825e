//! Error types for the data-loader crate.
//!
//! Every variant that comes from a snapshot file names the file, so a
//! failed startup can point the user at the right artifact.

use thiserror::Error;

/// Errors that can occur while loading the movie and similarity snapshots
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// A snapshot file does not exist
    #[error("Snapshot not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The movie list could not be decoded
    #[error("Malformed JSON in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A similarity score could not be read as a number
    #[error("{file}:{line}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A value outside the range the lookups accept
    #[error("Out of range {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A matrix row had a different width than the first row
    #[error("Similarity row {line} has {found} scores, expected {expected}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// The matrix and the movie table disagree on the number of rows
    #[error("Similarity matrix has {rows} rows but the movie list has {movies} records")]
    DimensionMismatch { movies: usize, rows: usize },

    #[error("Invalid snapshot: {0}")]
    ValidationError(String),
}

impl DataLoadError {
    /// True when the error means a snapshot file is absent.
    ///
    /// Front-ends use this to print setup guidance instead of a raw error.
    pub fn is_missing_file(&self) -> bool {
        match self {
            DataLoadError::FileNotFound { .. } => true,
            DataLoadError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
