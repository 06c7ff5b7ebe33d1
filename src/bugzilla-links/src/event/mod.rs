//! Triggering event context.
//!
//! GitHub Actions writes the webhook payload that triggered the workflow to
//! the file named by `GITHUB_EVENT_PATH`. This module turns that payload into
//! an explicit [`PullRequestContext`] handed to the runner.

mod error;
mod payload;

pub use error::EventError;

use crate::host::PullRequestRef;
use payload::EventPayload;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the path of the event payload file.
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Repository and pull request the run was triggered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Repository owner login.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number, if the event carried one.
    pub pull_number: Option<u64>,
}

impl PullRequestContext {
    /// Creates a context from its parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, pull_number: Option<u64>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            pull_number,
        }
    }

    /// Parses a context from the raw JSON of a webhook payload.
    ///
    /// `source` names where the JSON came from, for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::JsonError`] if the payload lacks the repository
    /// owner or name, or isn't valid JSON.
    pub fn from_json(json: &str, source: &str) -> Result<Self, EventError> {
        let payload: EventPayload =
            serde_json::from_str(json).map_err(|e| EventError::JsonError {
                path: source.to_string(),
                source: e,
            })?;

        Ok(Self {
            owner: payload.repository.owner.login,
            repo: payload.repository.name,
            pull_number: payload.number,
        })
    }

    /// Loads a context from a payload file.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::IoError`] if the file can't be read and
    /// [`EventError::JsonError`] if it can't be parsed.
    pub fn load(path: &Path) -> Result<Self, EventError> {
        debug!(path = %path.display(), "Loading event payload");

        let json = std::fs::read_to_string(path).map_err(|e| EventError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_json(&json, &path.display().to_string())
    }

    /// Loads a context from the file named by `GITHUB_EVENT_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingPath`] if the variable is unset, otherwise
    /// the errors of [`PullRequestContext::load`].
    pub fn from_env() -> Result<Self, EventError> {
        let path = std::env::var_os(EVENT_PATH_VAR).ok_or(EventError::MissingPath {
            var: EVENT_PATH_VAR,
        })?;
        Self::load(Path::new(&path))
    }

    /// Returns the key for remote calls, if the event named a pull request.
    #[must_use]
    pub fn pull_request(&self) -> Option<PullRequestRef> {
        self.pull_number
            .map(|number| PullRequestRef::new(&self.owner, &self.repo, number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PULL_REQUEST_EVENT: &str = r#"{
        "action": "opened",
        "number": 42,
        "pull_request": { "number": 42, "body": "Hello" },
        "repository": {
            "name": "fenix",
            "full_name": "mozilla-mobile/fenix",
            "owner": { "login": "mozilla-mobile", "type": "Organization" }
        }
    }"#;

    #[test]
    fn parses_pull_request_event() {
        let context = PullRequestContext::from_json(PULL_REQUEST_EVENT, "inline").unwrap();

        assert_eq!(context.owner, "mozilla-mobile");
        assert_eq!(context.repo, "fenix");
        assert_eq!(context.pull_number, Some(42));
        assert_eq!(
            context.pull_request(),
            Some(PullRequestRef::new("mozilla-mobile", "fenix", 42))
        );
    }

    #[test]
    fn missing_number_is_not_an_error() {
        let json = r#"{ "ref": "refs/heads/main",
            "repository": { "name": "fenix", "owner": { "login": "mozilla-mobile" } } }"#;

        let context = PullRequestContext::from_json(json, "inline").unwrap();

        assert_eq!(context.pull_number, None);
        assert_eq!(context.pull_request(), None);
    }

    #[test]
    fn rejects_payload_without_repository() {
        let result = PullRequestContext::from_json(r#"{ "number": 1 }"#, "inline");
        assert!(matches!(result, Err(EventError::JsonError { .. })));
    }

    #[test]
    fn loads_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        fs::write(&path, PULL_REQUEST_EVENT).unwrap();

        let context = PullRequestContext::load(&path).unwrap();
        assert_eq!(context.pull_number, Some(42));
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = PullRequestContext::load(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(EventError::IoError { .. })));
    }

    #[test]
    fn loads_from_event_path_variable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        fs::write(&path, PULL_REQUEST_EVENT).unwrap();

        let context =
            temp_env::with_var(EVENT_PATH_VAR, Some(&path), PullRequestContext::from_env).unwrap();
        assert_eq!(context.repo, "fenix");
    }

    #[test]
    fn event_path_variable_unset() {
        let result = temp_env::with_var_unset(EVENT_PATH_VAR, PullRequestContext::from_env);
        assert!(matches!(result, Err(EventError::MissingPath { .. })));
    }
}
