//! Checker Module
//!
//! Checkers decide whether a classified link points at something that
//! exists. Only local files are supported; external URLs are never fetched.

pub(crate) mod file;

use log::debug;

use crate::{InputContent, LinkResult, classify, extract::extract_from_input};
use file::FileChecker;

/// Check every internal link in a document.
///
/// Links of any other category are skipped. Every internal link is resolved
/// against the checker's base directory, wherever the document lives.
#[must_use]
pub fn check_document(checker: &FileChecker, input: &InputContent) -> Vec<LinkResult> {
    extract_from_input(input)
        .into_iter()
        .filter_map(|raw| {
            let link = classify(&raw.text);
            if !link.is_checkable() {
                return None;
            }
            let resolution = checker.check(link.clean_path.as_deref().unwrap_or_default());
            debug!("{} -> {resolution}", link.original);
            Some(LinkResult {
                line: raw.line,
                resolution,
                link,
            })
        })
        .collect()
}
