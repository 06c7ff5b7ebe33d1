//! CLI for the Bugzilla link annotator.
//!
//! Runs as a Docker-based GitHub Action: inputs arrive as `INPUT_*`
//! environment variables and the triggering event as the JSON file named by
//! `GITHUB_EVENT_PATH`. The outcome is printed as a workflow command.

use bugzilla_links::{
    workflow_command, AnnotatorConfig, GitHubHost, Outcome, PullRequestContext, Runner,
    DEFAULT_API_URL,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bugzilla link annotator - Add Bugzilla links from commit messages to a pull request.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token used for all API calls.
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    token: String,

    /// Regular expression whose first capture group is the bug number.
    #[arg(long, env = "INPUT_COMMIT-REGEXP")]
    commit_regexp: String,

    /// Description text to replace with the links, if present.
    #[arg(long, env = "INPUT_SECTION")]
    section: Option<String>,

    /// Path to the triggering event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    install_crypto_provider();

    let outcome = match parse_args(Args::try_parse()) {
        Ok(args) => run(args).await,
        Err(outcome) => outcome,
    };
    println!("{}", workflow_command(outcome.level(), &outcome.message()));

    if outcome.is_failure() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Selects aws-lc-rs as the process-wide rustls provider.
///
/// octocrab enables `ring` while this binary enables `aws-lc-rs`, so rustls
/// can't pick one by itself. Installing twice is harmless.
fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

/// Turns an argument error into a failed outcome.
///
/// `--help` and `--version` still print and exit as usual.
fn parse_args(parsed: Result<Args, clap::Error>) -> Result<Args, Outcome> {
    parsed.map_err(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        Outcome::Failed {
            error: e.to_string().trim_end().to_string(),
        }
    })
}

/// Loads inputs and the event, then runs the annotation.
///
/// Setup failures are reported the same way as failures during the run.
async fn run(args: Args) -> Outcome {
    match setup(&args) {
        Ok((runner, context)) => runner.run(&context).await,
        Err(e) => {
            error!(error = %e, "Failed to start");
            Outcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Validates inputs, reads the event payload and builds the GitHub client.
fn setup(
    args: &Args,
) -> Result<(Runner<GitHubHost>, PullRequestContext), Box<dyn std::error::Error>> {
    let config = AnnotatorConfig::new(&args.commit_regexp, args.section.clone())?;
    let context = PullRequestContext::load(&args.event_path)?;
    let host = GitHubHost::new(args.token.clone(), &args.api_url)?;
    Ok((Runner::new(host, config), context))
}
