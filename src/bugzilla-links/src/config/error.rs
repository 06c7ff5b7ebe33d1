//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating action inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The commit pattern is not a valid regular expression.
    #[error("Invalid commit-regexp '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The commit pattern has no group to capture the bug number from.
    #[error("commit-regexp '{pattern}' must contain a capture group for the bug number")]
    MissingCaptureGroup { pattern: String },
}
