use anyhow::Result;
use linkmend_lib::{InputContent, classify, extract::extract_from_input};
use log::{info, warn};
use std::io::{self, Write};
use std::path::Path;

use crate::ExitCode;
use crate::formatters::get_links_formatter;
use crate::options::Config;
use crate::stats::LinkListing;

/// List all links of the documents at `path`, grouped by category.
///
/// Listing never fails because of the links themselves; only unreadable
/// documents lead to a non-zero exit code.
pub(crate) fn extract(path: &Path, cfg: &Config) -> Result<ExitCode> {
    let files = super::collect_files(path, cfg)?;

    let mut listing = LinkListing::new();
    for file in &files {
        match InputContent::from_path(file) {
            Ok(input) => {
                let links = extract_from_input(&input);
                info!("Found {} href attributes in {}", links.len(), file.display());
                for raw in links {
                    listing.add(&classify(&raw.text));
                }
                listing.files += 1;
            }
            Err(e) => {
                warn!("{e}");
                listing.add_error(file, &e);
            }
        }
    }

    let formatter = get_links_formatter(&cfg.format);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", formatter.format(&listing)?)?;

    Ok(if listing.errors.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::LinkCheckFailure
    })
}
