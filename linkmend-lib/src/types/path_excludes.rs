use crate::{ErrorKind, Result};
use regex::RegexSet;
use std::path::Path;

/// `PathExcludes` decides whether a discovered file should be skipped.
///
/// Patterns are regular expressions matched against the file path as
/// displayed (relative to where the walk started).
#[derive(Debug, Clone)]
pub struct PathExcludes {
    regex: RegexSet,
}

impl PathExcludes {
    /// Compile the given exclusion patterns
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidExcludePattern`] naming the first pattern
    /// that is not a valid regular expression.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        let regex = RegexSet::new(&patterns).map_err(|e| {
            // Find the offending pattern, so the error message is actionable
            let bad = patterns
                .iter()
                .find(|p| regex::Regex::new(p).is_err())
                .cloned()
                .unwrap_or_default();
            ErrorKind::InvalidExcludePattern(bad, e)
        })?;
        Ok(Self { regex })
    }

    /// Returns `true` if the path matches any of the patterns
    #[must_use]
    pub fn is_excluded_path(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }

    /// Whether no patterns were given
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regex.is_empty()
    }
}

impl Default for PathExcludes {
    fn default() -> Self {
        Self {
            regex: RegexSet::empty(),
        }
    }
}
