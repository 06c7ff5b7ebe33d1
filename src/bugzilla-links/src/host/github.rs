//! GitHub implementation of [`PullRequestHost`].

use super::{HostError, PullRequestHost, PullRequestRef};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Instrument};

/// Default GitHub REST API base.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size GitHub accepts for listing pull request commits.
const COMMITS_PER_PAGE: u8 = 100;

/// Entry of `GET /repos/{owner}/{repo}/pulls/{number}/commits`.
#[derive(Debug, Deserialize)]
struct PullCommit {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

/// The part of a pull request the action reads and writes.
#[derive(Debug, Deserialize)]
struct PullBody {
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    body: &'a str,
}

/// Pull request access through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Builds an authenticated client against `api_url`.
    ///
    /// Requests are never retried. A rustls crypto provider must be installed
    /// for the process before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::GitHubError`] if the base URL is invalid or the
    /// client can't be built.
    pub fn new(token: impl Into<String>, api_url: &str) -> Result<Self, HostError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.into())
            .base_uri(api_url)?
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self { octocrab })
    }
}

fn pull_route(pull: &PullRequestRef) -> String {
    format!("/repos/{}/{}/pulls/{}", pull.owner, pull.repo, pull.number)
}

impl PullRequestHost for GitHubHost {
    async fn list_commit_messages(&self, pull: &PullRequestRef) -> Result<Vec<String>, HostError> {
        let span = info_span!("list_commits", pull = %pull);

        async {
            // Only the first page is read.
            let commits: Vec<PullCommit> = self
                .octocrab
                .get(
                    format!("{}/commits", pull_route(pull)),
                    Some(&[("per_page", COMMITS_PER_PAGE)]),
                )
                .await?;

            let messages: Vec<String> = commits
                .into_iter()
                .map(|commit| commit.commit.message)
                .collect();

            info!(count = messages.len(), "Listed pull request commits");
            Ok(messages)
        }
        .instrument(span)
        .await
    }

    async fn get_description(&self, pull: &PullRequestRef) -> Result<Option<String>, HostError> {
        let span = info_span!("get_pull_request", pull = %pull);

        async {
            let pr: PullBody = self.octocrab.get(pull_route(pull), None::<&()>).await?;

            debug!(has_body = pr.body.is_some(), "Fetched pull request");
            Ok(pr.body)
        }
        .instrument(span)
        .await
    }

    async fn update_description(&self, pull: &PullRequestRef, body: &str) -> Result<(), HostError> {
        let span = info_span!("update_pull_request", pull = %pull);

        async {
            let _: PullBody = self
                .octocrab
                .patch(pull_route(pull), Some(&UpdateBody { body }))
                .await?;

            info!("Pull request description updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
