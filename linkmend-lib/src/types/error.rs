use serde::{Serialize, Serializer};
use std::path::PathBuf;
use thiserror::Error;

/// Possible errors when working with `linkmend_lib`
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The file could not be read (permissions, vanished, not a file, ...)
    #[error("Failed to read from path: `{}`, reason: {}", .0.display(), .1)]
    ReadFile(PathBuf, #[source] std::io::Error),
    /// The fixer could not write the rewritten content back
    #[error("Failed to write to path: `{}`, reason: {}", .0.display(), .1)]
    WriteFile(PathBuf, #[source] std::io::Error),
    /// The directory to scan or to resolve links against is unusable
    #[error("Error with base dir `{}` : {}", .0.display(), .1)]
    InvalidBase(PathBuf, String),
    /// A path exclusion pattern is not a valid regular expression
    #[error("Invalid path exclusion pattern `{0}`")]
    InvalidExcludePattern(String, #[source] regex::Error),
    /// A fix rule pattern is not a valid regular expression
    #[error("Invalid fix rule pattern `{0}`")]
    InvalidFixPattern(String, #[source] regex::Error),
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ReadFile(p1, e1), Self::ReadFile(p2, e2))
            | (Self::WriteFile(p1, e1), Self::WriteFile(p2, e2)) => {
                p1 == p2 && e1.kind() == e2.kind()
            }
            (Self::InvalidBase(p1, r1), Self::InvalidBase(p2, r2)) => p1 == p2 && r1 == r2,
            (Self::InvalidExcludePattern(s1, _), Self::InvalidExcludePattern(s2, _))
            | (Self::InvalidFixPattern(s1, _), Self::InvalidFixPattern(s2, _)) => s1 == s2,
            _ => false,
        }
    }
}

impl Eq for ErrorKind {}

impl Serialize for ErrorKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_display_names_path() {
        let err = ErrorKind::ReadFile(
            PathBuf::from("site/about.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read from path: `site/about.html`, reason: denied"
        );
    }

    #[test]
    fn test_base_and_write_error_display() {
        let err = ErrorKind::InvalidBase(PathBuf::from("public"), "No such file or directory".into());
        assert_eq!(
            err.to_string(),
            "Error with base dir `public` : No such file or directory"
        );
        let err = ErrorKind::WriteFile(
            PathBuf::from("index.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to write to path: `index.html`, reason: read-only"
        );
    }

    #[test]
    fn test_io_errors_compare_by_kind() {
        let a = ErrorKind::WriteFile(
            PathBuf::from("a.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "one"),
        );
        let b = ErrorKind::WriteFile(
            PathBuf::from("a.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "two"),
        );
        let c = ErrorKind::ReadFile(
            PathBuf::from("a.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "one"),
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
