use thiserror::Error;

/// Result type for guide layout operations
pub type Result<T> = std::result::Result<T, GuideError>;

/// Errors that can occur while resolving or classifying indentation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// Per-line inputs disagree in length
    #[error("Invalid input: {what} has {actual} entries, expected {expected}")]
    InvalidInput {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid configuration (unit size, tab width, palette, metrics)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GuideError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a length mismatch error for a per-line array
    pub const fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidInput {
            what,
            expected,
            actual,
        }
    }
}
