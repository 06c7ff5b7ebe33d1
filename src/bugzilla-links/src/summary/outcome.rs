//! Run outcome types.

use serde::Serialize;

use super::AnnotationLevel;

/// Result of a single annotation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The description was updated with links.
    Annotated {
        /// Pull request that was updated.
        pull_number: u64,
        /// Bug numbers linked, in commit order.
        bug_ids: Vec<String>,
    },

    /// The event carried no pull request number.
    NoPullRequest,

    /// None of the commits referenced a bug.
    NoBugsFound {
        /// Pull request whose commits were scanned.
        pull_number: u64,
    },

    /// A step failed; nothing after it ran.
    Failed {
        /// Error message.
        error: String,
    },
}

impl Outcome {
    /// Returns the annotation level this outcome is reported at.
    #[must_use]
    pub fn level(&self) -> AnnotationLevel {
        match self {
            Self::Annotated { .. } => AnnotationLevel::Notice,
            Self::NoPullRequest | Self::NoBugsFound { .. } => AnnotationLevel::Warning,
            Self::Failed { .. } => AnnotationLevel::Error,
        }
    }

    /// Returns the human-readable message for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Annotated { pull_number, .. } => {
                format!("Added Bugzilla links in #{pull_number}.")
            }
            Self::NoPullRequest => "No pull request number in payload.".to_string(),
            Self::NoBugsFound { .. } => "No bugzilla bug numbers found in commits.".to_string(),
            Self::Failed { error } => error.clone(),
        }
    }

    /// Returns true if the run failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
