#![allow(unreachable_pub)]

mod error;
mod file;
mod input;
mod link;
mod path_excludes;
mod raw_link;
mod report;
mod resolution;

pub use error::ErrorKind;
pub use file::FileExtensions;
pub use input::InputContent;
pub use link::{ClassifiedLink, LinkCategory};
pub use path_excludes::PathExcludes;
pub use raw_link::RawLink;
pub use report::LinkResult;
pub use resolution::Resolution;

/// The linkmend `Result` type
pub type Result<T> = std::result::Result<T, crate::ErrorKind>;
