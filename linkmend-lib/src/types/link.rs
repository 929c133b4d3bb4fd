use serde::Serialize;
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumIter, IntoStaticStr};
use url::Url;

/// The kind of target an `href` value points at.
///
/// Only [`LinkCategory::Internal`] links are checked against the file system;
/// every other category is reported but never resolved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, StrumDisplay, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LinkCategory {
    /// `http://`, `https://` or protocol-relative `//` links
    External,
    /// `mailto:` links
    Email,
    /// `tel:` links
    Phone,
    /// `javascript:` pseudo links
    Script,
    /// Inline `data:` URIs
    DataUri,
    /// Links consisting of a fragment only, e.g. `#top`
    AnchorOnly,
    /// Links to a resource inside the same site tree
    Internal,
    /// Empty or whitespace-only values; callers should skip these
    Other,
}

/// A raw `href` value together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedLink {
    /// The `href` value exactly as it appeared in the markup
    pub original: String,
    /// What kind of link this is
    pub category: LinkCategory,
    /// Path with query string and fragment removed.
    ///
    /// Set if and only if `category` is [`LinkCategory::Internal`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_path: Option<String>,
    /// The fragment without the leading `#`; empty if there is none
    pub fragment: String,
}

impl ClassifiedLink {
    /// Whether the link carries a non-empty fragment
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// Only internal links are resolved against the file system
    #[must_use]
    pub const fn is_checkable(&self) -> bool {
        matches!(self.category, LinkCategory::Internal)
    }

    /// The absolute URL of an external link.
    ///
    /// Protocol-relative links (`//host/path`) are assumed to be served over
    /// `https`. Returns `None` for non-external links and for values which
    /// do not parse as a URL.
    #[must_use]
    pub fn external_url(&self) -> Option<Url> {
        if self.category != LinkCategory::External {
            return None;
        }
        let trimmed = self.original.trim();
        if trimmed.starts_with("//") {
            Url::parse(&format!("https:{trimmed}")).ok()
        } else {
            Url::parse(trimmed).ok()
        }
    }
}

impl Display for ClassifiedLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.original, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_display_is_snake_case() {
        assert_eq!(LinkCategory::AnchorOnly.to_string(), "anchor_only");
        assert_eq!(LinkCategory::DataUri.to_string(), "data_uri");
    }

    #[test]
    fn test_external_url_for_protocol_relative_link() {
        let link = classify("//cdn.example.com/lib.js");
        assert_eq!(
            link.external_url().map(String::from),
            Some("https://cdn.example.com/lib.js".to_string())
        );
    }

    #[test]
    fn test_external_url_is_none_for_internal_links() {
        assert_eq!(classify("/about").external_url(), None);
    }

    #[test]
    fn test_serialize_omits_missing_clean_path() {
        let json = serde_json::to_value(classify("mailto:me@example.com")).unwrap();
        assert_eq!(json["category"], "email");
        assert!(json.get("clean_path").is_none());
    }
}
