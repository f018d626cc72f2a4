//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Storage layer error (file system, permissions)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error (corrupt appointment file, bad config)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A string that is not of the form `date-<epoch-ms>`
    #[error("Invalid date identifier: {0}")]
    InvalidDateId(String),

    /// Date arithmetic left the range chrono can represent
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalendarError {
    /// Whether it is expected behavior (bad user input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidDateId(_) | Self::DateOutOfRange(_) | Self::Config(_) => true,
            Self::Storage(_) | Self::Serialization(_) => false,
        }
    }
}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Core layer Result type alias
pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
