#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod description;
pub mod event;
pub mod host;
pub mod runner;
pub mod scanner;
pub mod summary;

pub use config::{AnnotatorConfig, ConfigError};
pub use description::{bug_link, compose_description, render_links};
pub use event::{EventError, PullRequestContext};
pub use host::{GitHubHost, HostError, PullRequestHost, PullRequestRef, DEFAULT_API_URL};
pub use runner::{Runner, RunnerError};
pub use scanner::extract_bug_ids;
pub use summary::{workflow_command, AnnotationLevel, Outcome};
