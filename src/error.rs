use thiserror::Error;

/// Unified error type for semver operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Invalid semver: {0}")]
    InvalidVersion(String),

    #[error("Component overflow: {0}")]
    ComponentOverflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create an invalid version error naming the rejected input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverError::InvalidVersion(input.into())
    }

    /// Create an overflow error naming the component that could not be incremented
    pub fn overflow(component: impl Into<String>) -> Self {
        SemverError::ComponentOverflow(component.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// True for errors caused by the version string itself
    pub fn is_invalid_version(&self) -> bool {
        matches!(self, SemverError::InvalidVersion(_))
    }
}
