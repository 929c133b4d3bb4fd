use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use linkmend_lib::{ClassifiedLink, ErrorKind, LinkCategory, LinkResult};
use serde::Serialize;

/// The checked links of one document, in the order they appear
#[derive(Debug, Serialize)]
pub(crate) struct DocumentStats {
    pub(crate) path: PathBuf,
    pub(crate) links: Vec<LinkResult>,
}

impl DocumentStats {
    pub(crate) fn broken(&self) -> impl Iterator<Item = &LinkResult> {
        self.links.iter().filter(|result| result.is_broken())
    }
}

/// A document that could not be processed
#[derive(Debug, Serialize)]
pub(crate) struct FileError {
    pub(crate) path: PathBuf,
    pub(crate) error: String,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct CheckStats {
    /// Documents that were read and checked
    pub(crate) files: usize,
    /// Internal links seen across all documents
    pub(crate) total: usize,
    pub(crate) successful: usize,
    pub(crate) broken: usize,
    pub(crate) documents: Vec<DocumentStats>,
    pub(crate) errors: Vec<FileError>,
}

impl CheckStats {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_document(&mut self, path: &Path, links: Vec<LinkResult>) {
        self.files += 1;
        for result in &links {
            self.total += 1;
            if result.is_broken() {
                self.broken += 1;
            } else {
                self.successful += 1;
            }
        }
        self.documents.push(DocumentStats {
            path: path.to_path_buf(),
            links,
        });
    }

    pub(crate) fn add_error(&mut self, path: &Path, error: &ErrorKind) {
        self.errors.push(FileError {
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }

    /// Documents that contain at least one broken link
    pub(crate) fn failing_documents(&self) -> impl Iterator<Item = &DocumentStats> {
        self.documents.iter().filter(|doc| doc.broken().next().is_some())
    }

    #[inline]
    pub(crate) fn unreadable(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub(crate) fn is_success(&self) -> bool {
        self.broken == 0 && self.errors.is_empty()
    }
}

/// All links of one or more documents, grouped by category
#[derive(Debug, Default, Serialize)]
pub(crate) struct LinkListing {
    /// Documents the links were taken from
    pub(crate) files: usize,
    /// Non-empty `href` values, duplicates included
    pub(crate) total: usize,
    /// Unique values per category, sorted
    pub(crate) categories: BTreeMap<LinkCategory, BTreeSet<String>>,
    pub(crate) errors: Vec<FileError>,
}

impl LinkListing {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record one link. Empty values are not counted.
    pub(crate) fn add(&mut self, link: &ClassifiedLink) {
        if link.category == LinkCategory::Other {
            return;
        }
        self.total += 1;
        // Protocol-relative links are listed with `https:` prepended and
        // otherwise verbatim.
        let original = link.original.trim();
        let value = if original.starts_with("//") {
            format!("https:{original}")
        } else {
            original.to_string()
        };
        self.categories
            .entry(link.category)
            .or_default()
            .insert(value);
    }

    pub(crate) fn add_error(&mut self, path: &Path, error: &ErrorKind) {
        self.errors.push(FileError {
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }

    /// Number of distinct links over all categories
    pub(crate) fn unique(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }
}
