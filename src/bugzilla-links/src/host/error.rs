//! Remote host error types.

use std::error::Error as _;
use thiserror::Error;

/// Errors that can occur while talking to the source-hosting service.
#[derive(Debug, Error)]
pub enum HostError {
    /// GitHub API error.
    #[error("GitHub API error: {message}")]
    GitHubError {
        /// Message reported by GitHub, or the client error chain.
        message: String,
        #[source]
        source: octocrab::Error,
    },

    /// Failure reported by a host implementation that doesn't talk to GitHub.
    #[error("{message}")]
    Other { message: String },
}

impl From<octocrab::Error> for HostError {
    fn from(source: octocrab::Error) -> Self {
        let message = match &source {
            octocrab::Error::GitHub { source, .. } => source.message.clone(),
            other => error_chain(other),
        };
        Self::GitHubError { message, source }
    }
}

/// Joins an error and its sources, since octocrab's own `Display` only names
/// the variant.
fn error_chain(error: &octocrab::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
