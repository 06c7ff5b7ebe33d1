//! Bug number extraction from commit messages.

use regex::Regex;
use tracing::debug;

/// Commits whose message starts with this prefix never contribute a bug.
const REVERT_PREFIX: &str = "Revert";

/// Extracts bug numbers from commit messages, in commit order.
///
/// Each message is searched once with `pattern`; the first match's capture
/// group 1 becomes the bug number. Revert commits are skipped, messages that
/// don't match contribute nothing, and duplicates are kept.
pub fn extract_bug_ids<I, S>(messages: I, pattern: &Regex) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bugs = Vec::new();

    for message in messages {
        let message = message.as_ref();

        if message.starts_with(REVERT_PREFIX) {
            debug!(message = first_line(message), "Skipping revert commit");
            continue;
        }

        let Some(id) = pattern
            .captures(message)
            .and_then(|captures| captures.get(1))
        else {
            continue;
        };

        debug!(bug = id.as_str(), "Found bug reference");
        bugs.push(id.as_str().to_string());
    }

    bugs
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}
