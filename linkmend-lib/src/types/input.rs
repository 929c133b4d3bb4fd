use crate::{ErrorKind, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The decoded content of one HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputContent {
    /// Where the content was read from
    pub path: PathBuf,
    /// File content; invalid UTF-8 sequences are replaced with U+FFFD
    pub content: String,
}

impl InputContent {
    /// Read a whole file into memory.
    ///
    /// Decoding never fails: bytes which are not valid UTF-8 are substituted
    /// rather than aborting the read.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ReadFile`] if the file cannot be opened or read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| ErrorKind::ReadFile(path.to_path_buf(), e))?;
        Ok(Self {
            path: path.to_path_buf(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Create content from a string, e.g. for testing
    #[must_use]
    pub fn from_string(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            content: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_invalid_utf8_is_substituted() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.html");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"<a href=\"/ok\">\xff\xfe</a>").unwrap();

        let input = InputContent::from_path(&path)?;
        assert!(input.content.starts_with("<a href=\"/ok\">"));
        assert!(input.content.contains('\u{FFFD}'));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.html");
        let err = InputContent::from_path(&path).unwrap_err();
        assert!(matches!(err, ErrorKind::ReadFile(p, _) if p == path));
    }
}
