//! The diagnostic type shared by the tokenizer, parser, and evaluator.

use thiserror::Error;

/// An error raised while tokenizing, parsing, or evaluating a property
/// value expression.
///
/// The message is the complete diagnostic; callers prepend the property
/// name and source location when reporting to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PropertyError {
    /// The human-readable diagnostic.
    message: String,
}

impl PropertyError {
    /// Create an error from a diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
