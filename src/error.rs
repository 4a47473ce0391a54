use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DayiError {
    /// I/O failure with the operation and path that caused it.
    #[error("I/O error {operation} '{}': {source}", .path.display())]
    File {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Staging store could not be encoded or decoded.
    #[error("staging store error: {0}")]
    Store(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DayiError {
    /// Wrap an I/O error with the operation and path it came from.
    pub fn file(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DayiError::File {
            operation,
            path: path.into(),
            source,
        }
    }
}

impl From<bincode::Error> for DayiError {
    fn from(err: bincode::Error) -> Self {
        DayiError::Store(err.to_string())
    }
}
