//! GitHub Actions workflow commands.
//!
//! A line such as `::warning::message` printed to stdout is turned into an
//! annotation on the workflow run.

use std::fmt;

/// Severity of a workflow annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    /// Informational notice.
    Notice,
    /// Warning; the step still succeeds.
    Warning,
    /// Error; the step fails.
    Error,
}

impl AnnotationLevel {
    /// Returns the workflow command name for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AnnotationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a workflow command line for `message` at `level`.
#[must_use]
pub fn workflow_command(level: AnnotationLevel, message: &str) -> String {
    format!("::{level}::{}", escape_data(message))
}

/// Escapes command data the way the Actions runner expects.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_level() {
        assert_eq!(
            workflow_command(AnnotationLevel::Notice, "Added Bugzilla links in #42."),
            "::notice::Added Bugzilla links in #42."
        );
        assert_eq!(
            workflow_command(AnnotationLevel::Warning, "careful"),
            "::warning::careful"
        );
        assert_eq!(
            workflow_command(AnnotationLevel::Error, "Not Found"),
            "::error::Not Found"
        );
    }

    #[test]
    fn escapes_line_breaks_and_percent() {
        assert_eq!(
            workflow_command(AnnotationLevel::Error, "100% broken\r\nsee log"),
            "::error::100%25 broken%0D%0Asee log"
        );
    }
}
