//! Error types for adaptlfu

use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration rejected at construction
    InvalidConfig(String),

    /// Internal bookkeeping is broken
    InvariantViolation(String),
}

impl Error {
    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid cache configuration: {}", msg),
            Error::InvariantViolation(msg) => write!(f, "Cache invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
