//! Pull request description composition.
//!
//! Given the current description, the extracted bug numbers and an optional
//! section marker, produces the description to write back. Everything here is
//! pure so it can be tested without a GitHub connection.

mod links;

pub use links::{bug_link, render_links, BUGZILLA_SHOW_BUG_URL, LINE_BREAK};

/// Composes the new pull request description.
///
/// * No existing description (absent or empty): the link block alone.
/// * The section marker occurs in the description: the text before its first
///   occurrence, then the marker on its own line, then the link block. Text
///   after the marker is dropped.
/// * Otherwise: the link block is appended on a new line.
#[must_use]
pub fn compose_description<S: AsRef<str>>(
    existing: Option<&str>,
    bug_ids: &[S],
    section: Option<&str>,
) -> String {
    compose_with_links(existing, &render_links(bug_ids), section)
}

fn compose_with_links(existing: Option<&str>, links: &str, section: Option<&str>) -> String {
    let body = match existing {
        Some(body) if !body.is_empty() => body,
        _ => return links.to_string(),
    };

    let marker = section
        .filter(|marker| !marker.is_empty())
        .and_then(|marker| body.find(marker).map(|index| (marker, index)));

    match marker {
        Some((marker, index)) => {
            format!("{}{LINE_BREAK}{marker}{LINE_BREAK}{links}", &body[..index])
        }
        None => format!("{body}{LINE_BREAK}{links}"),
    }
}
