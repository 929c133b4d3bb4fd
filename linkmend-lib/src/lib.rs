//! `linkmend` is a library for keeping the links of a static HTML site in
//! order.
//!
//! It classifies `href` values, resolves internal links against the files
//! of a site directory and repairs a table of known-broken link patterns.
//! Nothing is fetched over the network.
//!
//! ```
//! use linkmend_lib::{classify, resolves, LinkCategory};
//!
//! let link = classify("/blog/post-1?utm=x#comments");
//! assert_eq!(link.category, LinkCategory::Internal);
//!
//! let dir = std::env::temp_dir();
//! let found = resolves(&dir, link.clean_path.as_deref().unwrap_or_default());
//! # let _ = found;
//! ```
//!
//! For more control over how extension-less links and directories are
//! resolved, build a [`FileChecker`] yourself:
//!
//! ```
//! use linkmend_lib::FileChecker;
//!
//! let checker = FileChecker::builder()
//!     .base("public")
//!     .index_files(vec!["index.html".to_string(), "index.htm".to_string()])
//!     .build();
//! let resolution = checker.check("/docs/");
//! println!("{resolution}");
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![allow(clippy::module_name_repetitions)]

mod checker;
mod classify;
mod types;

pub mod collector;
pub mod extract;
pub mod fix;

pub use crate::{
    checker::{
        check_document,
        file::{DEFAULT_FALLBACK_EXTENSION, DEFAULT_INDEX_FILE, FileChecker, resolves},
    },
    classify::classify,
    collector::Collector,
    fix::{FileFix, FixRule, FixRules, fix_file},
    types::*,
};
