//! Orchestrates a single annotation run.

mod error;

pub use error::RunnerError;

use crate::config::AnnotatorConfig;
use crate::description::compose_description;
use crate::event::PullRequestContext;
use crate::host::{PullRequestHost, PullRequestRef};
use crate::scanner::extract_bug_ids;
use crate::summary::Outcome;
use tracing::{error, info, info_span, warn, Instrument};

/// Annotates pull requests through a [`PullRequestHost`].
pub struct Runner<H> {
    host: H,
    config: AnnotatorConfig,
}

impl<H: PullRequestHost> Runner<H> {
    /// Builds a runner from a host and validated inputs.
    pub fn new(host: H, config: AnnotatorConfig) -> Self {
        Self { host, config }
    }

    /// Returns the host used for remote calls.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Runs the annotation for the pull request in `context`.
    ///
    /// Never fails: a failing remote call becomes [`Outcome::Failed`]
    /// carrying the error message, and nothing after it is attempted.
    pub async fn run(&self, context: &PullRequestContext) -> Outcome {
        let Some(pull) = context.pull_request() else {
            warn!(owner = %context.owner, repo = %context.repo, "No pull request number in payload");
            return Outcome::NoPullRequest;
        };

        let span = info_span!("annotate", pull = %pull);

        match self.annotate(&pull).instrument(span).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(pull = %pull, error = %e, "Failed to annotate pull request");
                Outcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn annotate(&self, pull: &PullRequestRef) -> Result<Outcome, RunnerError> {
        let messages = self.host.list_commit_messages(pull).await?;
        let bug_ids = extract_bug_ids(&messages, self.config.commit_pattern());

        if bug_ids.is_empty() {
            warn!(commits = messages.len(), "No bugzilla bug numbers found in commits");
            return Ok(Outcome::NoBugsFound {
                pull_number: pull.number,
            });
        }

        info!(count = bug_ids.len(), bugs = ?bug_ids, "Found bug references");

        let existing = self.host.get_description(pull).await?;
        let body = compose_description(existing.as_deref(), &bug_ids, self.config.section());
        self.host.update_description(pull, &body).await?;

        info!(pull_number = pull.number, "Added Bugzilla links");
        Ok(Outcome::Annotated {
            pull_number: pull.number,
            bug_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use std::sync::Mutex;

    /// Host whose commit listing always fails.
    struct UnreachableHost {
        calls: Mutex<Vec<&'static str>>,
    }

    impl PullRequestHost for UnreachableHost {
        async fn list_commit_messages(
            &self,
            _pull: &PullRequestRef,
        ) -> Result<Vec<String>, HostError> {
            self.calls.lock().unwrap().push("list_commits");
            Err(HostError::Other {
                message: "connection refused".to_string(),
            })
        }

        async fn get_description(&self, _pull: &PullRequestRef) -> Result<Option<String>, HostError> {
            self.calls.lock().unwrap().push("get");
            Ok(None)
        }

        async fn update_description(
            &self,
            _pull: &PullRequestRef,
            _body: &str,
        ) -> Result<(), HostError> {
            self.calls.lock().unwrap().push("update");
            Ok(())
        }
    }

    #[tokio::test]
    async fn host_error_becomes_failed_outcome() {
        let host = UnreachableHost {
            calls: Mutex::new(Vec::new()),
        };
        let config = AnnotatorConfig::new(r"(?i)bug (\d+)", None).unwrap();
        let runner = Runner::new(host, config);

        let outcome = runner
            .run(&PullRequestContext::new("owner", "repo", Some(3)))
            .await;

        assert_eq!(
            outcome,
            Outcome::Failed {
                error: "connection refused".to_string()
            }
        );
        assert_eq!(*runner.host().calls.lock().unwrap(), ["list_commits"]);
    }
}
