//! Access to the source-hosting service.
//!
//! The runner only ever needs three calls: list a pull request's commits,
//! read its description and write it back. They sit behind
//! [`PullRequestHost`] so the orchestration can run against an in-memory
//! host in tests; [`GitHubHost`] is the real implementation.
//!
//! None of the calls are retried and commit listing reads a single page of
//! up to 100 commits.

mod error;
mod github;
mod pull_request;

pub use error::HostError;
pub use github::{GitHubHost, DEFAULT_API_URL};
pub use pull_request::PullRequestRef;

use std::future::Future;

/// The remote operations needed to annotate a pull request.
pub trait PullRequestHost {
    /// Lists the commit messages of a pull request, in commit order.
    fn list_commit_messages(
        &self,
        pull: &PullRequestRef,
    ) -> impl Future<Output = Result<Vec<String>, HostError>> + Send;

    /// Returns the current description of a pull request, if it has one.
    fn get_description(
        &self,
        pull: &PullRequestRef,
    ) -> impl Future<Output = Result<Option<String>, HostError>> + Send;

    /// Replaces the description of a pull request.
    fn update_description(
        &self,
        pull: &PullRequestRef,
        body: &str,
    ) -> impl Future<Output = Result<(), HostError>> + Send;
}
