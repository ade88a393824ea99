//! Error types for the timeline library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for timeline operations that can fail.
///
/// The pure time helpers never produce this type; they report unparseable
/// input as `None`. It surfaces from the strict recalculation API, from
/// `FromStr` on [`crate::time::ClockTime`], and from recipe loading.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A time string matched neither the 12-hour nor the 24-hour pattern
    #[error("Invalid time format: '{input}'")]
    InvalidTime { input: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimelineError {
        TimelineError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimelineError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid time error for the rejected input.
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTime {
            input: input.into(),
        }
    }
}

/// Extension trait for I/O results that attaches the offending path.
pub trait ResultExt<T> {
    /// Map an I/O error into [`TimelineError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| TimelineError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
