//! Error types for bpdocs.
//!
//! Library crates use [`BpDocsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all bpdocs operations.
#[derive(Debug, thiserror::Error)]
pub enum BpDocsError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The blueprint provider could not be reached or did not answer in time.
    #[error("cannot reach blueprint provider at {endpoint}: {message}")]
    Connection { endpoint: String, message: String },

    /// The provider answered, but with an error status or an unusable body.
    #[error("provider error: {0}")]
    Provider(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad filter, malformed snapshot, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BpDocsError>;

impl BpDocsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a connection error for the given provider endpoint.
    pub fn connection(endpoint: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the provider-unreachable condition.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
