use thiserror::Error;

/// Unified error type for get-next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("level parameter ({level}) must be one of the followings: major, minor, patch")]
    Validation { level: String },

    #[error("Version parsing error: {0}")]
    Parse(#[from] semver::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in get-next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a validation error carrying the rejected level value
    pub fn validation(level: impl Into<String>) -> Self {
        NextVersionError::Validation {
            level: level.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Process exit status for this error.
    ///
    /// An invalid level exits with 1; every other failure exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            NextVersionError::Validation { .. } => 1,
            _ => 2,
        }
    }
}
