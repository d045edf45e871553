use std::fmt;

/// Unified error type for the lichtwerk crate.
#[derive(Debug, Clone)]
pub enum SiteError {
    /// Invalid or missing configuration value.
    Config(String),
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Config(msg) => write!(f, "configuration error: {msg}"),
            SiteError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SiteError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for SiteError {}

/// Result type alias using [`SiteError`].
pub type SiteResult<T> = Result<T, SiteError>;
