//! Runner error types.

/// Errors that can abort an annotation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Remote host errors.
    #[error(transparent)]
    Host(#[from] crate::host::HostError),
}
