//! Action input validation.
//!
//! Holds the compiled commit pattern and the optional section marker that
//! drive a single run.

mod error;

pub use error::ConfigError;

use regex::Regex;
use tracing::debug;

/// Validated inputs for annotating a pull request.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    /// Pattern whose first capture group is the bug number.
    commit_pattern: Regex,
    /// Marker that is replaced by the links, if present in the description.
    section: Option<String>,
}

impl AnnotatorConfig {
    /// Compiles the commit pattern and normalizes the section marker.
    ///
    /// An empty section marker is treated the same as no marker at all.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile
    /// and [`ConfigError::MissingCaptureGroup`] if it has no capture group.
    pub fn new(commit_regexp: &str, section: Option<String>) -> Result<Self, ConfigError> {
        let commit_pattern =
            Regex::new(commit_regexp).map_err(|source| ConfigError::InvalidPattern {
                pattern: commit_regexp.to_string(),
                source,
            })?;

        // captures_len counts the implicit whole-match group.
        if commit_pattern.captures_len() < 2 {
            return Err(ConfigError::MissingCaptureGroup {
                pattern: commit_regexp.to_string(),
            });
        }

        let section = section.filter(|s| !s.is_empty());
        debug!(pattern = commit_regexp, section = ?section, "Validated inputs");

        Ok(Self {
            commit_pattern,
            section,
        })
    }

    /// Returns the compiled commit pattern.
    pub fn commit_pattern(&self) -> &Regex {
        &self.commit_pattern
    }

    /// Returns the section marker, if one was configured.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pattern_with_capture_group() {
        let config = AnnotatorConfig::new(r"(?i)bug (\d+)", Some("## Bugs".to_string())).unwrap();

        assert_eq!(config.commit_pattern().as_str(), r"(?i)bug (\d+)");
        assert_eq!(config.section(), Some("## Bugs"));
    }

    #[test]
    fn empty_section_is_absent() {
        let config = AnnotatorConfig::new(r"bug (\d+)", Some(String::new())).unwrap();
        assert_eq!(config.section(), None);
    }

    #[test]
    fn rejects_invalid_pattern() {
        let result = AnnotatorConfig::new(r"bug (\d+", None);
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn rejects_pattern_without_group() {
        let result = AnnotatorConfig::new(r"bug \d+", None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingCaptureGroup { .. })
        ));
    }
}
