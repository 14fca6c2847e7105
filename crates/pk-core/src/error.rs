//! Error handling for profilekit.
//!
//! Profile accessors never fail: a missing or mistyped attribute is reported
//! as absence. Errors only arise on construction paths, when a populating
//! collaborator hands over data that cannot form a valid profile.

use thiserror::Error;

/// Result type alias using the profilekit error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for profilekit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The profile identifier is blank.
    #[error("invalid profile id: {0}")]
    InvalidProfileId(String),

    /// The language tag is not well formed.
    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),
}

impl Error {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid locale error for the given tag.
    #[must_use]
    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale(tag.into())
    }

    /// Returns whether the error was caused by caller-supplied data.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidProfileId(_) | Self::InvalidLocale(_))
    }
}
