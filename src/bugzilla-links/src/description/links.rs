//! Bugzilla link rendering.

/// Base URL of a Bugzilla bug page; the bug number is appended verbatim.
pub const BUGZILLA_SHOW_BUG_URL: &str = "https://bugzilla.mozilla.org/show_bug.cgi?id=";

/// Line separator used between generated links and around the section marker.
pub const LINE_BREAK: &str = "\r\n";

/// Renders the Bugzilla link for a single bug number.
#[must_use]
pub fn bug_link(id: &str) -> String {
    format!("{BUGZILLA_SHOW_BUG_URL}{id}")
}

/// Renders all bug numbers as links, one per line.
#[must_use]
pub fn render_links<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| bug_link(id.as_ref()))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
