use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    path::Path,
    str::FromStr,
};

/// The set of file extensions that mark a file as an HTML document worth
/// scanning.
///
/// Extensions are stored without the leading dot and compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileExtensions(Vec<String>);

impl FileExtensions {
    /// Returns `true` if the path has one of the extensions
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.0.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

impl Default for FileExtensions {
    fn default() -> Self {
        Self(vec!["html".to_string(), "htm".to_string()])
    }
}

impl FromStr for FileExtensions {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        ))
    }
}

impl TryFrom<String> for FileExtensions {
    type Error = std::convert::Infallible;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FileExtensions> for String {
    fn from(ext: FileExtensions) -> Self {
        ext.to_string()
    }
}

impl From<Vec<String>> for FileExtensions {
    fn from(exts: Vec<String>) -> Self {
        Self(exts)
    }
}

impl Display for FileExtensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
