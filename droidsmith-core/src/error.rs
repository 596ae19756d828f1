//! Error types for droidsmith core.

use std::{error::Error, fmt, io};

/// Error type for droidsmith core operations.
#[derive(Debug)]
pub enum DroidsmithError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for DroidsmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DroidsmithError {}

impl From<io::Error> for DroidsmithError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Convenience result type for droidsmith core.
pub type Result<T> = std::result::Result<T, DroidsmithError>;
