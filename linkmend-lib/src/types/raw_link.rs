use serde::Serialize;
use std::{fmt::Display, num::NonZeroUsize};

/// An `href` value as it appears in the source markup, before any
/// classification. The text is kept verbatim, including whitespace inside the
/// quotes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RawLink {
    /// Unparsed attribute value
    pub text: String,
    /// The 1-based line of the attribute in the document
    pub line: NonZeroUsize,
}

impl Display for RawLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
impl From<(&str, usize)> for RawLink {
    fn from((text, line): (&str, usize)) -> Self {
        RawLink {
            text: text.to_string(),
            line: NonZeroUsize::new(line).expect("line numbers start at 1"),
        }
    }
}
