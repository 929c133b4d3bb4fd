//! Deciding what an `href` value points at.
//!
//! Classification looks at the prefix of the trimmed value only. Rules are
//! evaluated in order and the first match wins; anything that is not
//! recognised as a special scheme is an internal link.

use crate::types::{ClassifiedLink, LinkCategory};

/// Scheme prefixes and the category they map to, in evaluation order.
///
/// Prefixes compare literally, so `HTTP://x` is an internal path.
/// `//` (protocol-relative) and `#` are checked after these.
const SCHEME_PREFIXES: [(&str, LinkCategory); 6] = [
    ("http://", LinkCategory::External),
    ("https://", LinkCategory::External),
    ("mailto:", LinkCategory::Email),
    ("tel:", LinkCategory::Phone),
    ("javascript:", LinkCategory::Script),
    ("data:", LinkCategory::DataUri),
];

/// Classify a raw `href` value.
///
/// Every input maps to exactly one category; there are no error cases.
/// For internal links the query string is dropped and the fragment split
/// off, leaving a clean path suitable for file lookups.
///
/// ```
/// use linkmend_lib::{classify, LinkCategory};
///
/// let link = classify("/blog/post-1?utm=x#comments");
/// assert_eq!(link.category, LinkCategory::Internal);
/// assert_eq!(link.clean_path.as_deref(), Some("/blog/post-1"));
/// assert_eq!(link.fragment, "comments");
/// ```
#[must_use]
pub fn classify(raw: &str) -> ClassifiedLink {
    let trimmed = raw.trim();
    let category = category_of(trimmed);

    let (clean_path, fragment) = match category {
        LinkCategory::Internal => {
            let (path, fragment) = split_reference(trimmed);
            (Some(path.to_string()), fragment.to_string())
        }
        LinkCategory::AnchorOnly => (None, trimmed[1..].to_string()),
        _ => (None, String::new()),
    };

    ClassifiedLink {
        original: raw.to_string(),
        category,
        clean_path,
        fragment,
    }
}

fn category_of(link: &str) -> LinkCategory {
    if link.is_empty() {
        return LinkCategory::Other;
    }
    for (prefix, category) in SCHEME_PREFIXES {
        if link.starts_with(prefix) {
            return category;
        }
    }
    if link.starts_with("//") {
        return LinkCategory::External;
    }
    if link.starts_with('#') {
        return LinkCategory::AnchorOnly;
    }
    LinkCategory::Internal
}

/// Split a relative reference into its path and fragment, discarding any
/// query string.
///
/// A `?` after the first `#` belongs to the fragment, as in RFC 3986.
fn split_reference(reference: &str) -> (&str, &str) {
    let (before_fragment, fragment) = reference.split_once('#').unwrap_or((reference, ""));
    let path = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(path, _query)| path);
    (path, fragment)
}
