//! Pulling `href` attribute values out of markup.
//!
//! This is deliberately not an HTML parser: values are found with a regular
//! expression, so links inside comments or scripts are reported as well.

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{InputContent, RawLink};

/// `href="..."` or `href='...'`, attribute name in any case. The closing
/// quote must match the opening one.
static HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href=(?:"(?<double>[^"]*)"|'(?<single>[^']*)')"#)
        .expect("href pattern is valid")
});

/// Extract all `href` values from the given content, in document order.
///
/// Values are returned verbatim, including whitespace inside the quotes;
/// empty values are kept too so callers see every occurrence.
#[must_use]
pub fn extract_links(content: &str) -> Vec<RawLink> {
    let mut links = Vec::new();
    let mut line = 1;
    let mut last_offset = 0;

    for captures in HREF_PATTERN.captures_iter(content) {
        let Some(value) = captures.name("double").or_else(|| captures.name("single")) else {
            continue;
        };
        let start = captures.get(0).map_or(value.start(), |m| m.start());
        line += content[last_offset..start].matches('\n').count();
        last_offset = start;

        links.push(RawLink {
            text: value.as_str().to_string(),
            line: NonZeroUsize::new(line).unwrap_or(NonZeroUsize::MIN),
        });
    }
    links
}

/// Convenience wrapper around [`extract_links`] for file contents
#[must_use]
pub fn extract_from_input(input: &InputContent) -> Vec<RawLink> {
    extract_links(&input.content)
}
