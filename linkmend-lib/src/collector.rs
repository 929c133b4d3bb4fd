use crate::{ErrorKind, FileExtensions, PathExcludes, Result};
use log::{debug, warn};
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Collector finds the HTML documents to work on.
///
/// By default only the files directly inside the root directory are
/// collected; call [`Collector::recursive`] to descend into sub-directories.
/// The result is sorted by path so that output is stable between runs.
#[derive(Debug, Clone)]
pub struct Collector {
    root: PathBuf,
    recursive: bool,
    skip_hidden: bool,
    extensions: FileExtensions,
    excluded_paths: PathExcludes,
}

impl Collector {
    /// Create a new collector for the given directory (or single file)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Collector {
            root: root.into(),
            recursive: false,
            skip_hidden: true,
            extensions: FileExtensions::default(),
            excluded_paths: PathExcludes::default(),
        }
    }

    /// Descend into sub-directories
    #[must_use]
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Skip files and directories whose name starts with a dot
    #[must_use]
    pub fn skip_hidden(mut self, yes: bool) -> Self {
        self.skip_hidden = yes;
        self
    }

    /// Only collect files with one of these extensions
    #[must_use]
    pub fn extensions(mut self, extensions: FileExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Skip files matching any of these patterns
    #[must_use]
    pub fn excluded_paths(mut self, excluded_paths: PathExcludes) -> Self {
        self.excluded_paths = excluded_paths;
        self
    }

    /// Collect all matching files below the root.
    ///
    /// If the root is a file, it is returned as-is regardless of its
    /// extension. Unreadable directory entries are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidBase`] if the root does not exist.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }
        if !self.root.is_dir() {
            return Err(ErrorKind::InvalidBase(
                self.root.clone(),
                "No such file or directory".to_string(),
            ));
        }

        let mut walker = WalkDir::new(&self.root).sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|e| !(self.skip_hidden && is_hidden(e)))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.extensions.matches(entry.path()) {
                continue;
            }
            if self.excluded_paths.is_excluded_path(entry.path()) {
                debug!("Excluding {}", entry.path().display());
                continue;
            }
            files.push(entry.into_path());
        }
        files.sort();
        Ok(files)
    }
}

// The root itself is never considered hidden, so `.` works as an input.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}
