use serde::Serialize;
use std::{fmt::Display, path::PathBuf};

const ICON_OK: &str = "\u{2713}"; // ✓
const ICON_MISSING: &str = "\u{2717}"; // ✗

/// Outcome of resolving one internal link against the file system.
///
/// Computed fresh for every link; nothing is cached since the tree may change
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    /// Whether the link points at something that exists
    pub exists: bool,
    /// The last candidate path that was tested. On success this is the file
    /// that satisfied the link, otherwise the plain joined path.
    pub path: PathBuf,
}

impl Resolution {
    pub(crate) const fn found(path: PathBuf) -> Self {
        Self { exists: true, path }
    }

    pub(crate) const fn missing(path: PathBuf) -> Self {
        Self {
            exists: false,
            path,
        }
    }

    /// A check mark or a cross, depending on the outcome
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        if self.exists { ICON_OK } else { ICON_MISSING }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.path.display())
    }
}
