use serde::Serialize;
use std::{fmt::Display, num::NonZeroUsize};

use super::{ClassifiedLink, Resolution};

/// The outcome of checking one internal link found in a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkResult {
    /// The classified link
    pub link: ClassifiedLink,
    /// 1-based line where the link appeared
    pub line: NonZeroUsize,
    /// Where the link resolved to, or the path that was missing
    pub resolution: Resolution,
}

impl LinkResult {
    /// Whether the target was not found
    #[must_use]
    pub const fn is_broken(&self) -> bool {
        !self.resolution.exists
    }
}

impl Display for LinkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.resolution.icon(), self.link.original)
    }
}
