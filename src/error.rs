//! Error types for URL building
//!
//! Every failure is raised at the offending call and returned to the caller
//! unchanged. Nothing in the crate retries or substitutes defaults.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, UrlBuilderError>;

/// Errors raised while configuring or building an image URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlBuilderError {
    /// A required string was empty
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: String, message: String },

    /// A numeric value fell outside the operation's accepted interval
    #[error("Value for '{param}' out of range: {message}")]
    OutOfRange { param: String, message: String },

    /// Crop coordinates violate the ordering rule
    #[error("Malformed crop rectangle ({x1},{y1},{x2},{y2}): {reason}")]
    MalformedRectangle {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        reason: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`UrlBuilderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    MalformedRectangle,
    Config,
}

impl UrlBuilderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UrlBuilderError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            UrlBuilderError::OutOfRange { .. } => ErrorKind::OutOfRange,
            UrlBuilderError::MalformedRectangle { .. } => ErrorKind::MalformedRectangle,
            UrlBuilderError::Config(_) => ErrorKind::Config,
        }
    }

    /// Helper constructors for common error patterns
    pub fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        UrlBuilderError::InvalidArgument {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(param: impl Into<String>, message: impl Into<String>) -> Self {
        UrlBuilderError::OutOfRange {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn malformed_rectangle(
        (x1, y1, x2, y2): (i32, i32, i32, i32),
        reason: impl Into<String>,
    ) -> Self {
        UrlBuilderError::MalformedRectangle {
            x1,
            y1,
            x2,
            y2,
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        UrlBuilderError::Config(message.into())
    }
}

/// Fails with InvalidArgument when `value` is empty
pub(crate) fn require_non_empty(param: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UrlBuilderError::invalid_argument(
            param,
            "must not be empty",
        ));
    }
    Ok(())
}
