//! Webhook payload deserialization.

use serde::Deserialize;

/// The subset of a `pull_request` webhook payload the action reads.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EventPayload {
    /// Pull request number; absent for events that aren't about a pull request.
    #[serde(default)]
    pub number: Option<u64>,

    /// Repository the event was raised in.
    pub repository: PayloadRepository,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PayloadRepository {
    pub name: String,
    pub owner: PayloadOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PayloadOwner {
    pub login: String,
}
