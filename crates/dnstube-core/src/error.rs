//! Error types for the DnsTube utilities
//!
//! This module defines the error taxonomy shared by all utility crates.

use thiserror::Error;

/// Result type alias for DnsTube operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DnsTube utilities
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failures (timeout, DNS, connection reset, non-2xx status)
    #[error("transport error: {0}")]
    Transport(String),

    /// Response bodies that fail syntax validation or JSON parsing
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No usable network interface
    #[error("network unavailable: {0}")]
    Unavailable(String),

    /// Local network-stack errors (hostname lookup, interface enumeration)
    #[error("network error: {0}")]
    Network(#[from] std::io::Error),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a malformed-response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create an unavailable-network error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
