//! Error types for tthrs.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while building a Tiger tree.
#[derive(Debug)]
pub enum TthError {
    /// The input path does not name an existing regular file.
    ///
    /// Reported before any stream is opened.
    NotFound(PathBuf),

    /// An I/O error occurred while reading input data.
    ///
    /// Aborts the whole run; in the parallel engine the remaining workers
    /// are signalled to stop and no partial tree is returned.
    Io(std::io::Error),

    /// The tree reducer was asked to reduce zero digests.
    ///
    /// Indicates a sizing bug upstream, never a user-facing input state.
    EmptyReduction,

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for TthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TthError::NotFound(path) => {
                write!(f, "file not found: {}", path.display())
            }
            TthError::Io(e) => write!(f, "io error: {}", e),
            TthError::EmptyReduction => {
                write!(f, "cannot reduce an empty digest level")
            }
            TthError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for TthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TthError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TthError {
    fn from(e: std::io::Error) -> Self {
        TthError::Io(e)
    }
}
