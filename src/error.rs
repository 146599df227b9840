use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the reference algorithms and the comparison tooling.
///
/// Only the Fibonacci computer and configuration loading can fail; the
/// collection algorithms accept any finite input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("fibonacci({n}) does not fit in 128 bits")]
    Overflow { n: i64 },

    #[error("failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl GuideError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
