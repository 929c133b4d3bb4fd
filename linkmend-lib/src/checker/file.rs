use log::debug;
use path_clean::PathClean;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use typed_builder::TypedBuilder;

use crate::Resolution;

/// Default name of the file served for a directory, including the site root
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Default extension tried for extension-less links
pub const DEFAULT_FALLBACK_EXTENSION: &str = "html";

/// Resolves cleaned internal link paths to files below a base directory.
///
/// Static site generators commonly emit links without the `.html` suffix
/// and rely on either extension-less rewriting or directory indexes on the
/// server. `FileChecker` accepts both conventions:
///
/// 1. An empty path or `/` resolves iff the root index file exists.
/// 2. A single leading `/` is stripped, so root-relative links are looked up
///    below the base directory.
/// 3. A regular file at the joined path resolves.
/// 4. If the last segment has no `.`, each fallback extension is appended in
///    turn (`about` -> `about.html`).
/// 5. If the joined path is a directory, each index file is tried inside it.
///
/// Both fallback lists are configurable; an empty list disables the rule.
///
/// ```
/// use linkmend_lib::FileChecker;
///
/// let checker = FileChecker::builder()
///     .base("public")
///     .fallback_extensions(vec!["html".to_string(), "htm".to_string()])
///     .build();
/// assert!(!checker.check("/definitely/not/here").exists);
/// ```
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
#[builder(field_defaults(setter(into)))]
pub struct FileChecker {
    /// Directory that root-relative links are resolved against
    base: PathBuf,
    /// File that must exist for `/` (and empty paths) to resolve
    #[builder(default = String::from(DEFAULT_INDEX_FILE))]
    root_index: String,
    /// Extensions appended to extension-less paths, in order
    #[builder(default = vec![String::from(DEFAULT_FALLBACK_EXTENSION)])]
    fallback_extensions: Vec<String>,
    /// Index files looked up inside directories, in order
    #[builder(default = vec![String::from(DEFAULT_INDEX_FILE)])]
    index_files: Vec<String>,
}

impl FileChecker {
    /// A checker with the default policy for the given base directory
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self::builder().base(base).build()
    }

    /// The directory all internal links are resolved against
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve a clean path against the base directory.
    ///
    /// Root-relative (`/about`) and plain relative (`about`, `../a.html`)
    /// paths are both joined onto the base directory; the location of the
    /// document a link came from plays no role.
    ///
    /// A missing target is a normal outcome and reported through
    /// [`Resolution::exists`], never as an error.
    #[must_use]
    pub fn check(&self, clean_path: &str) -> Resolution {
        if clean_path.is_empty() || clean_path == "/" {
            let index = self.base.join(&self.root_index);
            return found_if(index.exists(), index);
        }

        let relative = clean_path.strip_prefix('/').unwrap_or(clean_path);
        let full_path = self.base.join(relative);
        debug!("Resolving {clean_path:?} as {}", full_path.display());

        if full_path.is_file() {
            return Resolution::found(full_path.clean());
        }

        if let Some(found) = self.check_with_fallback_extensions(relative, &full_path) {
            return Resolution::found(found.clean());
        }

        if full_path.is_dir() {
            if let Some(found) = self.check_index_files(&full_path) {
                return Resolution::found(found.clean());
            }
        }

        Resolution::missing(full_path.clean())
    }

    /// Try `path.<ext>` for each fallback extension, but only if the last
    /// segment of the link carries no extension of its own
    fn check_with_fallback_extensions(&self, relative: &str, path: &Path) -> Option<PathBuf> {
        let last_segment = relative.rsplit('/').next().unwrap_or(relative);
        if last_segment.is_empty() || last_segment.contains('.') {
            return None;
        }
        self.fallback_extensions
            .iter()
            .map(|ext| with_appended_extension(path, ext))
            .inspect(|candidate| debug!("Trying fallback {}", candidate.display()))
            .find(|candidate| candidate.exists())
    }

    fn check_index_files(&self, dir: &Path) -> Option<PathBuf> {
        self.index_files
            .iter()
            .map(|index| dir.join(index))
            .inspect(|candidate| debug!("Trying index file {}", candidate.display()))
            .find(|candidate| candidate.exists())
    }
}

/// Resolve a clean path against `base` using the default policy.
///
/// Shorthand for `FileChecker::new(base).check(clean_path).exists`.
#[must_use]
pub fn resolves(base: &Path, clean_path: &str) -> bool {
    FileChecker::new(base).check(clean_path).exists
}

fn found_if(exists: bool, path: PathBuf) -> Resolution {
    if exists {
        Resolution::found(path.clean())
    } else {
        Resolution::missing(path.clean())
    }
}

// Append instead of `set_extension`, which would replace an existing
// extension and mangle names such as `v1.2`.
fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}
