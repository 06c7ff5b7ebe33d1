//! Event payload error types.

use thiserror::Error;

/// Errors that can occur while loading the triggering event.
#[derive(Debug, Error)]
pub enum EventError {
    /// `GITHUB_EVENT_PATH` is not set.
    #[error("{var} is not set; is this running inside GitHub Actions?")]
    MissingPath { var: &'static str },

    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not the expected JSON shape.
    #[error("Failed to parse event payload '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
