//! Passport subsystem errors
//!
//! Only input loading can fail. Malformed tokens and invalid records are
//! not errors; they simply do not count.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for passport operations
pub type PassportResult<T> = Result<T, PassportError>;

/// Passport subsystem errors
#[derive(Debug, Error)]
pub enum PassportError {
    #[error("Failed to read input '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PassportError {
    /// Create an I/O error for the given input path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PassportError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PassportError::Io { .. } => "PASSPORT_INPUT_UNREADABLE",
        }
    }
}
